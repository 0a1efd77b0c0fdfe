use crate::error::AttributeError;

/// A parsed `name(value[+value...])` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

/// Parses a single attribute clause.
///
/// The clause must be exactly `name(arguments)`: the name holds no brackets of
/// any kind and the arguments hold no parentheses. Whitespace around the
/// clause and before the opening parenthesis is ignored. Arguments are split on `+`
/// and each token loses one leading and one trailing `"`. Values are kept
/// verbatim otherwise. An empty argument list yields one empty value.
///
/// # Errors
/// Returns an [`AttributeError`] carrying the trimmed clause when it is malformed.
pub fn parse_attribute(clause: &str) -> Result<Attribute, AttributeError> {
    let clause = clause.trim();
    let bad = || AttributeError {
        clause: clause.to_string(),
    };

    let (name, rest) = clause.split_once('(').ok_or_else(bad)?;
    let name = name.trim_end();
    let arguments = rest.strip_suffix(')').ok_or_else(bad)?;
    if name.contains(is_bracket) || arguments.contains(['(', ')']) {
        return Err(bad());
    }

    Ok(Attribute {
        name: name.to_string(),
        values: arguments
            .split('+')
            .map(|token| unquote(token).to_string())
            .collect(),
    })
}

fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

fn unquote(token: &str) -> &str {
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(clause: &str) -> Vec<String> {
        parse_attribute(clause).unwrap().values
    }

    #[test]
    fn test_single_value() {
        let attr = parse_attribute(r#"age("30")"#).unwrap();
        assert_eq!(attr.name, "age");
        assert_eq!(attr.values, vec!["30"]);
    }

    #[test]
    fn test_multiple_values() {
        assert_eq!(values(r#"hobby("chess"+"reading")"#), vec!["chess", "reading"]);
    }

    #[test]
    fn test_empty_arguments_yield_one_empty_value() {
        let attr = parse_attribute("Type()").unwrap();
        assert_eq!(attr.name, "Type");
        assert_eq!(attr.values, vec![""]);
    }

    #[test]
    fn test_unquoted_values_and_case_are_kept() {
        assert_eq!(values("mood(happy+Sad)"), vec!["happy", "Sad"]);
    }

    #[test]
    fn test_only_one_quote_stripped_per_side() {
        assert_eq!(values(r#"q(""x"")"#), vec![r#""x""#]);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(values(r#"  age("30")  "#), vec!["30"]);
    }

    #[test]
    fn test_space_before_paren_is_not_part_of_name() {
        assert_eq!(parse_attribute(r#"Person ("Alice")"#).unwrap().name, "Person");
    }

    #[test]
    fn test_rejects_missing_parens() {
        let err = parse_attribute("age").unwrap_err();
        assert_eq!(err.clause, "age");
        assert!(parse_attribute(r#"age("30""#).is_err());
    }

    #[test]
    fn test_rejects_nested_parens() {
        assert!(parse_attribute(r#"a(b("c"))"#).is_err());
        assert!(parse_attribute(r#"a("x)y")"#).is_err());
    }

    #[test]
    fn test_rejects_brackets_in_name() {
        assert!(parse_attribute(r#"[Person("Alice")"#).is_err());
        assert!(parse_attribute(r#"a}b("c")"#).is_err());
    }
}

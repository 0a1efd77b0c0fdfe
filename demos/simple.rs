use miette::Report;
use wpp_core::{parse_extended, serialize, Mode};

fn main() {
    let wpp_data = r#"
        Notes about the cast.

        [Character("Aria"){
            Species("Elf")
            Likes("Old maps"+"Rain")
        }]
    "#;

    match parse_extended(wpp_data) {
        Ok(block) => {
            println!("Parsed {} node(s):", block.document.len());
            println!("{}", serialize(&block.document, Mode::Compact));
            match block.document.to_json() {
                Ok(json) => println!("As JSON:\n{json}"),
                Err(e) => eprintln!("Failed to encode JSON: {e}"),
            }
            if let Some(appendix) = block.appendix {
                println!("Appendix:\n{appendix}");
            }
        }
        Err(e) => {
            eprintln!("Failed to parse W++: {:?}", Report::new(e));
        }
    }
}

//! Editing struct-tag style annotations.
//!
//! Run with: cargo run --example struct_tags

use std::error::Error;
use tagcase::{tags, to_camel_case, to_snake_case, TagOptions, TagString};

fn main() -> Result<(), Box<dyn Error>> {
    let fields = ["ID", "AuthorID", "CreatedAt"];

    for field in fields {
        let mut tag = tags! {
            col: to_snake_case(field),
            json: format!("{},omitempty", to_camel_case(field)),
        };
        tag.sort();
        println!("{field:<10} `{tag}`");
    }

    let mut tag = TagString::from(r#"xyz:"1" fkey:"id" json:"x" db:"users""#);
    tag.remove_multi(["fkey"])?;
    tag.sort_with_options(&TagOptions::new().with_leading_key("db"));
    println!("\nsorted by db first: `{tag}`");

    if let Err(err) = tag.remove_multi(["json", "not a key"]) {
        println!("remove_multi: {err}");
    }
    println!("after removal:      `{tag}`");

    Ok(())
}

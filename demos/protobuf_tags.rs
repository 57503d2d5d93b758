//! Reading and rewriting the `protobuf` tag of generated code.
//!
//! Run with: cargo run --example protobuf_tags

use std::error::Error;
use tagcase::TagString;

fn main() -> Result<(), Box<dyn Error>> {
    let mut tag = TagString::from(
        r#"protobuf:"varint,5,opt,name=type,proto3,enum=models.CommentType" json:"type,omitempty""#,
    );

    let Some(mut info) = tag.protobuf_info() else {
        println!("no protobuf tag");
        return Ok(());
    };
    println!("{info:#?}");

    info.json_name = Some("commentType".to_string());
    tag.set_protobuf_info(&info);
    println!("\nrewritten: `{tag}`");

    Ok(())
}

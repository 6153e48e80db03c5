use jsource_model::ImportStatement;

use crate::cursor::Cursor;
use crate::error::{check, ConstructKind, ParseError};
use crate::package::dotted_name;
use crate::tokenizer::Token;
use crate::{ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::ImportStatement;

/// `import [static] a.b.C;`, wildcards included in the name.
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<ImportStatement>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    if !cursor.eat_keyword("import") {
        return Err(ParseError::single(KIND, "Expected 'import' keyword!"));
    }

    let is_static = cursor.eat_keyword("static");
    let mut messages = Vec::new();
    let name = dotted_name(&mut cursor);
    if name.is_empty() {
        messages.push("Failed to find import name!".to_string());
    }
    if !cursor.eat_separator(';') {
        messages.push("Failed to find ';' after import statement!".to_string());
    }
    check(KIND, messages)?;

    let node = ImportStatement::builder()
        .editable(options.editable)
        .is_static(is_static)
        .import_name(name)
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;
    Ok(Parsed::new(node, cursor.pos()))
}

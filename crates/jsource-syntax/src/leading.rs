use jsource_model::{Annotation, Javadoc};

use crate::cursor::Cursor;
use crate::error::{ConstructKind, ParseError};
use crate::{annotation, javadoc, ParseOptions};

pub(crate) const UNATTACHED: &str = "Found javadoc or annotations not attached to any element!";
pub(crate) const DUPLICATE_JAVADOC: &str = "Found more than one javadoc for a single element!";

/// Javadoc and annotations waiting for the element they precede.
#[derive(Debug, Clone, Default)]
pub(crate) struct Leading {
    pub(crate) javadoc: Option<Javadoc>,
    pub(crate) annotations: Vec<Annotation>,
}

impl Leading {
    pub(crate) fn is_empty(&self) -> bool {
        self.javadoc.is_none() && self.annotations.is_empty()
    }

    pub(crate) fn set_javadoc(&mut self, javadoc: Javadoc, kind: ConstructKind) -> Result<(), ParseError> {
        if self.javadoc.is_some() {
            return Err(ParseError::single(kind, DUPLICATE_JAVADOC));
        }
        self.javadoc = Some(javadoc);
        Ok(())
    }
}

/// Collects any javadoc and annotations in front of a declaration. Plain comments end the run.
pub(crate) fn collect(
    cursor: &mut Cursor<'_>,
    kind: ConstructKind,
    options: &ParseOptions,
) -> Result<Leading, ParseError> {
    let mut leading = Leading::default();
    loop {
        cursor.skip_trivia();
        let Some(token) = cursor.peek() else {
            break;
        };
        if token.is_javadoc() {
            cursor.bump();
            leading.set_javadoc(javadoc::from_token(token, options)?, kind)?;
        } else if token.is_separator('@') {
            let parsed = annotation::parse(cursor.tokens(), cursor.pos(), options)?;
            *cursor = cursor.at(parsed.next);
            leading.annotations.push(parsed.node);
        } else {
            break;
        }
    }
    Ok(leading)
}

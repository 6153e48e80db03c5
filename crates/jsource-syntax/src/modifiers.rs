use jsource_model::Visibility;

use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

impl Modifier {
    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "abstract" => Modifier::Abstract,
            _ => return None,
        })
    }

    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
        }
    }

    fn visibility(self) -> Option<Visibility> {
        match self {
            Modifier::Public => Some(Visibility::Public),
            Modifier::Protected => Some(Visibility::Protected),
            Modifier::Private => Some(Visibility::Private),
            _ => None,
        }
    }
}

/// The modifier run in front of a class, field or method.
#[derive(Debug, Clone, Default)]
pub(crate) struct Modifiers {
    pub(crate) list: Vec<Modifier>,
    pub(crate) visibility: Visibility,
    pub(crate) is_static: bool,
    pub(crate) is_final: bool,
    pub(crate) is_abstract: bool,
    /// Duplicate and conflicting modifiers, in encounter order.
    pub(crate) problems: Vec<String>,
}

impl Modifiers {
    pub(crate) fn is_only(&self, modifier: Modifier) -> bool {
        self.list == [modifier]
    }

    fn push(&mut self, modifier: Modifier) {
        if self.list.contains(&modifier) {
            self.problems
                .push(format!("Found duplicate modifier: '{}'", modifier.keyword()));
        } else if let Some(visibility) = modifier.visibility() {
            if self.visibility != Visibility::None {
                self.problems.push(format!(
                    "Found more than one visibility modifier: '{}'",
                    modifier.keyword()
                ));
            }
            self.visibility = visibility;
        }

        match modifier {
            Modifier::Static => self.is_static = true,
            Modifier::Final => self.is_final = true,
            Modifier::Abstract => self.is_abstract = true,
            _ => {}
        }
        self.list.push(modifier);
    }
}

/// Consumes every leading modifier keyword.
pub(crate) fn collect(cursor: &mut Cursor<'_>) -> Modifiers {
    let mut modifiers = Modifiers::default();
    loop {
        let mut lookahead = cursor.clone();
        lookahead.skip_trivia();
        let Some(modifier) = lookahead
            .peek()
            .and_then(|token| Modifier::from_keyword(&token.text))
        else {
            break;
        };
        lookahead.bump();
        *cursor = lookahead;
        modifiers.push(modifier);
    }
    modifiers
}

use std::borrow::Cow;

/// Identifies one glyph: a code point in a named icon font family.
///
/// Icon sets usually implement this on an enum of their glyph names.
pub trait IconCode {
    fn font_family(&self) -> &str;
    fn unicode(&self) -> char;
}

/// Free-standing [`IconCode`] value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodePoint {
    family: Cow<'static, str>,
    unicode: char,
}

impl CodePoint {
    pub const fn new(family: &'static str, unicode: char) -> Self {
        Self {
            family: Cow::Borrowed(family),
            unicode,
        }
    }

    pub fn owned(family: impl Into<String>, unicode: char) -> Self {
        Self {
            family: Cow::Owned(family.into()),
            unicode,
        }
    }
}

impl IconCode for CodePoint {
    fn font_family(&self) -> &str {
        &self.family
    }

    fn unicode(&self) -> char {
        self.unicode
    }
}

impl<T: IconCode + ?Sized> IconCode for &T {
    fn font_family(&self) -> &str {
        (**self).font_family()
    }

    fn unicode(&self) -> char {
        (**self).unicode()
    }
}

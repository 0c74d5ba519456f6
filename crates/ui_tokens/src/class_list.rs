use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered class-string builder.
///
/// Empty fragments are skipped so optional table lookups never leave double spaces behind.
pub struct ClassList {
    classes: String,
}

impl ClassList {
    /// Starts an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment.
    pub fn with(mut self, fragment: impl AsRef<str>) -> Self {
        let fragment = fragment.as_ref().trim();
        if !fragment.is_empty() {
            if !self.classes.is_empty() {
                self.classes.push(' ');
            }
            self.classes.push_str(fragment);
        }
        self
    }

    /// Appends a fragment only when `condition` holds.
    pub fn with_if(self, condition: bool, fragment: impl AsRef<str>) -> Self {
        if condition {
            self.with(fragment)
        } else {
            self
        }
    }

    /// Appends an optional fragment.
    pub fn with_opt<S: AsRef<str>>(self, fragment: Option<S>) -> Self {
        match fragment {
            Some(fragment) => self.with(fragment),
            None => self,
        }
    }

    /// Finishes the list.
    pub fn build(self) -> String {
        self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_empty_fragments_and_honors_conditions() {
        let classes = ClassList::new()
            .with("flex")
            .with("")
            .with("  ")
            .with_if(false, "hidden")
            .with_if(true, "items-center")
            .with_opt(None::<&str>)
            .with_opt(Some(" gap-2 "))
            .build();
        assert_eq!(classes, "flex items-center gap-2");
    }
}

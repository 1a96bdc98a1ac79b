use super::Printer;
use crate::ast::{Literal, TemplateLiteral};
use crate::error::PrintError;

impl<'a> Printer<'a> {
    // =========================================================================
    // Literals
    // =========================================================================

    /// `raw` is printed verbatim when present. A regex literal without raw
    /// text prints as an equivalent `new RegExp(...)` call — same AST on
    /// re-parse, different spelling. Anything else prints as the JSON
    /// serialization of its value.
    pub(super) fn print_literal(&mut self, literal: &Literal) -> Result<(), PrintError> {
        if let Some(raw) = &literal.raw {
            return self.write(raw);
        }
        if let Some(regex) = &literal.regex {
            let pattern = serde_json::to_string(&regex.pattern)?;
            let flags = serde_json::to_string(&regex.flags)?;
            self.write("new RegExp(")?;
            self.write(&pattern)?;
            self.write(", ")?;
            self.write(&flags)?;
            return self.write(")");
        }
        let json = serde_json::to_string(&literal.value)?;
        self.write(&json)
    }

    pub(super) fn print_template_literal(
        &mut self,
        template: &TemplateLiteral,
    ) -> Result<(), PrintError> {
        self.write("`")?;
        for (i, expression) in template.expressions.iter().enumerate() {
            let quasi = template.quasis.get(i).ok_or_else(|| {
                PrintError::InvalidNode(
                    "template literal quasis must be one longer than expressions".to_string(),
                )
            })?;
            self.write(&quasi.raw)?;
            self.write("${")?;
            self.print_expression(expression)?;
            self.write("}")?;
        }
        let last = template.quasis.last().ok_or_else(|| {
            PrintError::InvalidNode("template literal must have at least one quasi".to_string())
        })?;
        self.write(&last.raw)?;
        self.write("`")
    }
}

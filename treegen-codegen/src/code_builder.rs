//! Code builder for assembling generated files with consistent indentation.

use treegen_core::{compact_blank_lines, reindent};

use crate::Indent;

/// Fluent API for building code with proper indentation.
///
/// Hand-written comments and snippets are reflowed to the current
/// indentation, and [`build`](Self::build) cleans trailing whitespace and
/// repeated blank lines from the finished buffer.
///
/// # Example (Consuming API)
///
/// ```
/// use treegen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::default()
///     .line("class Node {")
///     .indent()
///     .comment("// ", "
///         Returns the child count.
///     ")
///     .line("int num_children() const;")
///     .dedent()
///     .line("};")
///     .build();
///
/// assert_eq!(
///     code,
///     "class Node {\n  // Returns the child count.\n  int num_children() const;\n};\n"
/// );
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use treegen_codegen::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::FOUR);
/// builder
///     .push_line("message Node {")
///     .push_indent()
///     .push_line("optional int32 kind = 1;")
///     .push_dedent()
///     .push_line("}");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a hand-indented comment block (mutable).
    ///
    /// Every line is reflowed to the current indentation and starts with
    /// `marker` (e.g. `"// "` or `"# "`). Blank text adds nothing.
    pub fn push_comment(&mut self, marker: &str, text: &str) -> &mut Self {
        let prefix = format!("{}{}", self.indent_prefix(), marker);
        self.push_reindented(text, &prefix)
    }

    /// Add a hand-indented code snippet at the current indentation (mutable).
    ///
    /// Relative indentation inside the snippet is kept. Blank text adds nothing.
    pub fn push_snippet(&mut self, text: &str) -> &mut Self {
        let prefix = self.indent_prefix();
        self.push_reindented(text, &prefix)
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a hand-indented comment block; see [`push_comment`](Self::push_comment).
    pub fn comment(mut self, marker: &str, text: &str) -> Self {
        self.push_comment(marker, text);
        self
    }

    /// Add a hand-indented code snippet; see [`push_snippet`](Self::push_snippet).
    pub fn snippet(mut self, text: &str) -> Self {
        self.push_snippet(text);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use treegen_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::default()
    ///     .block_with_close("enum Kind {", "};", |b| b.line("KIND_UNKNOWN = 0,"))
    ///     .build();
    ///
    /// assert_eq!(code, "enum Kind {\n  KIND_UNKNOWN = 0,\n};\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the raw buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    ///
    /// Trailing whitespace is stripped from every line and runs of blank
    /// lines are collapsed to one.
    pub fn build(self) -> String {
        compact_blank_lines(&self.buffer)
    }

    fn indent_prefix(&self) -> String {
        self.indent.as_str().repeat(self.indent_level)
    }

    fn push_reindented(&mut self, text: &str, prefix: &str) -> &mut Self {
        if text.trim().is_empty() {
            return self;
        }
        self.buffer.push_str(&reindent(text, prefix));
        self.buffer.push('\n');
        self
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

//! Presentation of minimization results
//!
//! Nothing here reaches into engine state: equations are built from a
//! [`Cover`] and variable names, charts from a [`ChartData`] record.
//!
//! - [`Equation`]: `F(x,y,z) = …` in plain text and LaTeX
//! - [`chart_terminal`] / [`chart_latex`]: prime implicant chart tables
//! - [`implicant_table`]: binary/literal listing of a set of terms
//! - [`pla`]: single-output PLA export

pub mod pla;
pub mod table;

use crate::chart::{ChartData, LATEX_MARKER, TEXT_MARKER};
use crate::cover::Cover;
use crate::term::Term;
use std::fmt;

pub use table::terminal_table;

/// Output notation for expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Plain text: `x·y′ + z`
    #[default]
    Text,
    /// LaTeX: `x \cdot \bar{y} + z`
    Latex,
}

impl Notation {
    /// Default marker for covered chart cells in this notation
    pub fn marker(self) -> &'static str {
        match self {
            Notation::Text => TEXT_MARKER,
            Notation::Latex => LATEX_MARKER,
        }
    }
}

/// A minimal cover rendered as an equation in both notations
///
/// Both strings carry the function header, e.g. `F(x,y,z) = z′ + x·y′`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Equation {
    /// Plain-text equation
    pub text: String,
    /// LaTeX equation
    pub latex: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    header_len: usize,
}

impl Equation {
    /// Render `cover` over `variables`
    pub fn new<S: AsRef<str>>(cover: &Cover, variables: &[S]) -> Self {
        let header = function_header(variables);
        Equation {
            text: format!("{}{}", header, cover.to_expression(variables)),
            latex: format!("{}{}", header, cover.to_latex(variables)),
            header_len: header.len(),
        }
    }

    /// The right-hand side only
    pub fn expression(&self, notation: Notation) -> &str {
        match notation {
            Notation::Text => &self.text[self.header_len..],
            Notation::Latex => &self.latex[self.header_len..],
        }
    }

    /// The full equation in `notation`
    pub fn get(&self, notation: Notation) -> &str {
        match notation {
            Notation::Text => &self.text,
            Notation::Latex => &self.latex,
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// `F(a,b,c) = `
pub fn function_header<S: AsRef<str>>(variables: &[S]) -> String {
    let names: Vec<&str> = variables.iter().map(AsRef::as_ref).collect();
    format!("F({}) = ", names.join(","))
}

/// Box-drawing prime implicant chart
///
/// Rows are labelled by the minterm bit-pattern, columns by the implicant
/// pattern; covered cells show the record's marker.
pub fn chart_terminal(data: &ChartData) -> String {
    let mut headers = vec!["Minterm".to_string()];
    headers.extend(data.implicants.iter().cloned());
    terminal_table(&headers, &chart_rows(data))
}

/// LaTeX `tabular` prime implicant chart
///
/// The record's marker is used as-is; pass a record built with
/// `with_marker(LATEX_MARKER)` for a typeset check mark.
pub fn chart_latex(data: &ChartData) -> String {
    let cols = format!("|{}", "c|".repeat(data.num_columns() + 1));
    let mut header = vec!["Minterm".to_string()];
    header.extend(data.implicants.iter().cloned());

    let hline = r"\hline";
    let mut out = format!("\\begin{{tabular}}{{{}}}\n", cols);
    out.push_str(hline);
    out.push('\n');
    out.push_str(&header.join(" & "));
    out.push_str(" \\\\\n");
    for row in chart_rows(data) {
        out.push_str(hline);
        out.push('\n');
        out.push_str(&row.join(" & "));
        out.push_str(" \\\\\n");
    }
    out.push_str(hline);
    out.push_str("\n\\end{tabular}");
    out
}

fn chart_rows(data: &ChartData) -> Vec<Vec<String>> {
    data.minterm_patterns
        .iter()
        .enumerate()
        .map(|(r, label)| {
            let mut row = vec![label.clone()];
            row.extend((0..data.num_columns()).map(|c| data.cell(r, c).to_string()));
            row
        })
        .collect()
}

/// Two-column "Binary | Literal" listing of `terms`
pub fn implicant_table<S: AsRef<str>>(terms: &[Term], variables: &[S]) -> String {
    let headers = ["Binary".to_string(), "Literal".to_string()];
    let rows: Vec<Vec<String>> = terms
        .iter()
        .map(|t| vec![t.to_string(), t.to_expression(variables)])
        .collect();
    terminal_table(&headers, &rows)
}

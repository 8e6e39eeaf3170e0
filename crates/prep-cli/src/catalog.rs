//! Operation catalog printed by `prep operations`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub group: &'static str,
    pub command: &'static str,
    pub description: &'static str,
}

pub const OPERATIONS: &[OperationInfo] = &[
    OperationInfo {
        group: "clean",
        command: "remove-missing",
        description: "Remove missing values (null, \"\", nan, none)",
    },
    OperationInfo {
        group: "clean",
        command: "fill-missing",
        description: "Replace missing values with --fill-value",
    },
    OperationInfo {
        group: "numeric",
        command: "normalize",
        description: "Min-max rescale into [--new-min, --new-max]",
    },
    OperationInfo {
        group: "numeric",
        command: "standardize",
        description: "Z-score using the population standard deviation",
    },
    OperationInfo {
        group: "numeric",
        command: "clip",
        description: "Clamp values into [--min, --max]",
    },
    OperationInfo {
        group: "numeric",
        command: "to-integers",
        description: "Parse and truncate to integers, skipping non-numeric values",
    },
    OperationInfo {
        group: "numeric",
        command: "log-transform",
        description: "Natural log of positive values, skipping the rest",
    },
    OperationInfo {
        group: "text",
        command: "tokenize",
        description: "Lower-cased word tokens",
    },
    OperationInfo {
        group: "text",
        command: "remove-punctuation",
        description: "Replace punctuation with spaces",
    },
    OperationInfo {
        group: "text",
        command: "remove-stopwords",
        description: "Lower-case and drop --stopwords",
    },
    OperationInfo {
        group: "struct",
        command: "shuffle",
        description: "Shuffle a copy, reproducibly with --seed",
    },
    OperationInfo {
        group: "struct",
        command: "flatten",
        description: "Concatenate bracketed lists like [1,2]",
    },
    OperationInfo {
        group: "struct",
        command: "unique",
        description: "Remove duplicates, keeping first occurrences",
    },
];

pub fn operations_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Command"),
        header_cell("Description"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    for op in OPERATIONS {
        table.add_row(vec![
            Cell::new(op.group).fg(Color::DarkGrey),
            Cell::new(op.command)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(op.description),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

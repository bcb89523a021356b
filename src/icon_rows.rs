//! Ordered view-model behind the repeatable icon inputs

use uuid::Uuid;

/// One icon input with its own remove control
#[derive(Debug, Clone, PartialEq)]
pub struct IconRow {
    pub id: Uuid,
    pub value: String,
}

impl IconRow {
    pub fn blank() -> IconRow {
        IconRow {
            id: Uuid::new_v4(),
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconRows {
    rows: Vec<IconRow>,
}

impl IconRows {
    pub fn new() -> Self {
        IconRows { rows: Vec::new() }
    }

    pub fn with_blank_rows(count: usize) -> Self {
        IconRows {
            rows: (0..count).map(|_| IconRow::blank()).collect(),
        }
    }

    /// Append a blank row and return its id
    pub fn add(&mut self) -> Uuid {
        let row = IconRow::blank();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Remove a row; a removed row never comes back
    pub fn remove(&mut self, id: Uuid) -> bool {
        let original_len = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() < original_len
    }

    pub fn set_value(&mut self, id: Uuid, value: String) -> bool {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .map(|row| {
                row.value = value;
            })
            .is_some()
    }

    /// Raw input values in display order, blanks included
    pub fn values(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.value.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

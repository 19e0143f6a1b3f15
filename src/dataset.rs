//! In-memory column table the comparator measures against.
//!
//! Columns are stored by name in insertion order and always share one row
//! count. `Clone` copies every column, so a cloned dataset can be mutated
//! without touching the original.

use crate::AggBenchError;

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Categorical(Vec<String>),
    Float(Vec<f64>),
    Int(Vec<i64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Categorical(values) => values.len(),
            Column::Float(values) => values.len(),
            Column::Int(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Column::Categorical(_) => "categorical",
            Column::Float(_) => "float",
            Column::Int(_) => "int",
        }
    }

    /// Cell at `idx`. Panics when `idx` is out of bounds, like slice indexing.
    pub fn value(&self, idx: usize) -> Value<'_> {
        match self {
            Column::Categorical(values) => Value::Str(&values[idx]),
            Column::Float(values) => Value::Float(values[idx]),
            Column::Int(values) => Value::Int(values[idx]),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Str(&'a str),
    Float(f64),
    Int(i64),
}

impl<'a> Value<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Str(_) => None,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.as_f64().is_some_and(|v| v > 0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<Self, AggBenchError> {
        self.insert_column(name, column)?;
        Ok(self)
    }

    /// Adds `column`, replacing any existing column of the same name in place.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), AggBenchError> {
        let name = name.into();
        let position = self.position(&name);
        let others = self
            .columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != position)
            .map(|(_, col)| col.len())
            .next();
        if let Some(expected) = others {
            if column.len() != expected {
                return Err(AggBenchError::LengthMismatch {
                    column: name,
                    expected,
                    actual: column.len(),
                });
            }
        }
        match position {
            Some(idx) => self.columns[idx] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(())
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.columns.len())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Result<&Column, AggBenchError> {
        self.position(name)
            .map(|idx| &self.columns[idx])
            .ok_or_else(|| AggBenchError::missing_column(name))
    }

    pub fn categories(&self, name: &str) -> Result<&[String], AggBenchError> {
        match self.column(name)? {
            Column::Categorical(values) => Ok(values.as_slice()),
            _ => Err(AggBenchError::type_mismatch(name, "categorical")),
        }
    }

    pub fn floats(&self, name: &str) -> Result<&[f64], AggBenchError> {
        match self.column(name)? {
            Column::Float(values) => Ok(values.as_slice()),
            _ => Err(AggBenchError::type_mismatch(name, "float")),
        }
    }

    pub fn ints(&self, name: &str) -> Result<&[i64], AggBenchError> {
        match self.column(name)? {
            Column::Int(values) => Ok(values.as_slice()),
            _ => Err(AggBenchError::type_mismatch(name, "int")),
        }
    }

    pub fn categories_mut(&mut self, name: &str) -> Result<&mut [String], AggBenchError> {
        match self.column_mut(name)? {
            Column::Categorical(values) => Ok(values.as_mut_slice()),
            _ => Err(AggBenchError::type_mismatch(name, "categorical")),
        }
    }

    pub fn floats_mut(&mut self, name: &str) -> Result<&mut [f64], AggBenchError> {
        match self.column_mut(name)? {
            Column::Float(values) => Ok(values.as_mut_slice()),
            _ => Err(AggBenchError::type_mismatch(name, "float")),
        }
    }

    pub fn ints_mut(&mut self, name: &str) -> Result<&mut [i64], AggBenchError> {
        match self.column_mut(name)? {
            Column::Int(values) => Ok(values.as_mut_slice()),
            _ => Err(AggBenchError::type_mismatch(name, "int")),
        }
    }

    /// Numeric view of a float or int column, widened to `f64`.
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>, AggBenchError> {
        match self.column(name)? {
            Column::Float(values) => Ok(values.clone()),
            Column::Int(values) => Ok(values.iter().map(|v| *v as f64).collect()),
            Column::Categorical(_) => Err(AggBenchError::type_mismatch(name, "numeric")),
        }
    }

    /// Builds float column `name` as `f(left[i], right[i])` for every row.
    pub fn derive_float<F>(
        &mut self,
        name: &str,
        left: &str,
        right: &str,
        f: F,
    ) -> Result<(), AggBenchError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let lhs = self.numeric(left)?;
        let rhs = self.numeric(right)?;
        let derived = lhs.iter().zip(&rhs).map(|(a, b)| f(*a, *b)).collect();
        self.insert_column(name, Column::Float(derived))
    }

    pub fn rows(&self) -> Rows<'_> {
        Rows {
            dataset: self,
            next: 0,
        }
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column, AggBenchError> {
        match self.position(name) {
            Some(idx) => Ok(&mut self.columns[idx]),
            None => Err(AggBenchError::missing_column(name)),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

pub struct Rows<'a> {
    dataset: &'a Dataset,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.dataset.row_count() {
            return None;
        }
        let row = Row {
            dataset: self.dataset,
            index: self.next,
        };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.row_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// One row of a dataset. Every `get` resolves the column by name.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, name: &str) -> Result<Value<'a>, AggBenchError> {
        Ok(self.dataset.column(name)?.value(self.index))
    }

    pub fn get_str(&self, name: &str) -> Result<&'a str, AggBenchError> {
        self.get(name)?
            .as_str()
            .ok_or_else(|| AggBenchError::type_mismatch(name, "categorical"))
    }

    pub fn get_f64(&self, name: &str) -> Result<f64, AggBenchError> {
        self.get(name)?
            .as_f64()
            .ok_or_else(|| AggBenchError::type_mismatch(name, "numeric"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dataset {
        Dataset::new()
            .with_column("label", Column::Categorical(vec!["a".into(), "b".into()]))
            .expect("label")
            .with_column("amount", Column::Float(vec![1.5, 2.5]))
            .expect("amount")
    }

    #[test]
    fn test_replacing_column_keeps_position() {
        let mut ds = small();
        ds.insert_column("label", Column::Int(vec![7, 8]))
            .expect("replace");
        let names: Vec<&str> = ds.column_names().collect();
        assert_eq!(names, vec!["label", "amount"]);
        assert_eq!(ds.shape(), (2, 2));
        assert_eq!(ds.ints("label").expect("ints"), &[7, 8]);
    }

    #[test]
    fn test_single_column_may_be_replaced_with_new_length() {
        let mut ds = Dataset::new()
            .with_column("x", Column::Int(vec![1]))
            .expect("x");
        ds.insert_column("x", Column::Int(vec![1, 2, 3]))
            .expect("replace");
        assert_eq!(ds.shape(), (3, 1));
    }

    #[test]
    fn test_value_widening() {
        assert_eq!(Value::Int(-1).as_f64(), Some(-1.0));
        assert!(!Value::Int(-1).is_positive());
        assert!(Value::Float(0.1).is_positive());
        assert!(!Value::Str("x").is_positive());
    }
}

//! Collection wrapper for displaying groups of records.

use std::fmt;

use crate::models::Entity;

/// Newtype wrapper for displaying a list of records of one kind.
///
/// Each record uses its own Display format; an empty list prints a single
/// "No … found." line.
pub struct Records<E: Entity>(pub Vec<E>);

impl<E: Entity> fmt::Display for Records<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No {} found.", E::kind().plural())
        } else {
            for record in &self.0 {
                write!(f, "{record}")?;
            }
            Ok(())
        }
    }
}

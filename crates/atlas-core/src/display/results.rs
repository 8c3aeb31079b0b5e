//! Result wrapper types for displaying save outcomes.

use std::fmt;

use crate::models::Entity;

/// Wrapper type for displaying the result of a save-new operation.
///
/// Prints a confirmation line with the kind and the freshly assigned ID,
/// followed by the stored record.
pub struct CreateResult<E: Entity> {
    pub resource: E,
}

impl<E: Entity> CreateResult<E> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: E) -> Self {
        Self { resource }
    }
}

impl<E: Entity> fmt::Display for CreateResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", E::kind(), self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of an update.
pub struct UpdateResult<E: Entity> {
    pub resource: E,
}

impl<E: Entity> UpdateResult<E> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: E) -> Self {
        Self { resource }
    }
}

impl<E: Entity> fmt::Display for UpdateResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", E::kind(), self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Region};

    #[test]
    fn test_create_result_display() {
        let region = Region::new("DZ-01", "01", "Adrar", 1, 3).with_id(12);
        let output = format!("{}", CreateResult::new(region));

        assert!(output.starts_with("Created region with ID: 12\n\n"));
        assert!(output.contains("# 12. Adrar"));
    }

    #[test]
    fn test_update_result_display() {
        let country = Country::new("DZ", "Algeria", 1).with_id(3);
        let output = format!("{}", UpdateResult::new(country));

        assert!(output.starts_with("Updated country with ID: 3\n\n"));
        assert!(output.contains("- Code: DZ"));
    }
}

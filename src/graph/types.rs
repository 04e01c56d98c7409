//! Vertex identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// A value usable as a graph vertex identifier.
///
/// Vertices must be hashable (for the id → slot index) and totally ordered,
/// since every solver breaks ties by the smallest identifier. Implemented
/// for the integer types, `char`, strings and pairs/triples of vertices.
///
/// # Examples
///
/// ```
/// use u_tourgraph::graph::Vertex;
///
/// assert!(3usize.is_valid_id());
/// assert!(("depot", 2u32).is_valid_id());
/// assert!(!String::from("  ").is_valid_id());
/// ```
pub trait Vertex: Clone + Eq + Hash + Ord + Debug + Send + Sync {
    /// Whether this value may be inserted as a vertex.
    ///
    /// Every value of the numeric types is valid; blank strings are not.
    fn is_valid_id(&self) -> bool {
        true
    }
}

macro_rules! impl_vertex {
    ($($t:ty),* $(,)?) => {
        $(impl Vertex for $t {})*
    };
}

impl_vertex!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

impl Vertex for String {
    fn is_valid_id(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Vertex for &'static str {
    fn is_valid_id(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl<A: Vertex, B: Vertex> Vertex for (A, B) {
    fn is_valid_id(&self) -> bool {
        self.0.is_valid_id() && self.1.is_valid_id()
    }
}

impl<A: Vertex, B: Vertex, C: Vertex> Vertex for (A, B, C) {
    fn is_valid_id(&self) -> bool {
        self.0.is_valid_id() && self.1.is_valid_id() && self.2.is_valid_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_always_valid() {
        assert!(0u8.is_valid_id());
        assert!((-5i64).is_valid_id());
        assert!('x'.is_valid_id());
    }

    #[test]
    fn test_blank_strings_invalid() {
        assert!(!"".is_valid_id());
        assert!(!String::from("\t").is_valid_id());
        assert!(String::from("a").is_valid_id());
    }

    #[test]
    fn test_tuples_check_every_component() {
        assert!((1u32, "b").is_valid_id());
        assert!(!(1u32, "").is_valid_id());
        assert!(!(1u32, 2u32, String::new()).is_valid_id());
    }
}

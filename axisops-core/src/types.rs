/// Defines the possible data types for Tensor elements.
///
/// The operators in this crate never look at element values, so every
/// data type goes through them the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// 32-bit integer type.
    I32,
    /// 64-bit integer type.
    I64,
    /// Boolean type (true/false values).
    Bool,
}

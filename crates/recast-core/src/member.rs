//! Field locators: typed handles to one field of a record type

use std::fmt;

/// A typed handle to one field of kind `V` within record type `T`.
///
/// This is the registry's field locator: resolved once when a binding is
/// registered, applied by reference each time a record is translated. It is
/// bound to `T`'s definition rather than to any instance, so it never
/// expires, and it is a plain `Copy` function pointer, so a registry holding
/// thousands of bindings stays cheap to clone and safe to share.
///
/// Non-capturing field-projection closures coerce to it directly:
///
/// ```
/// use recast_core::Member;
///
/// struct Sprite {
///     frames: i64,
/// }
///
/// let locator: Member<Sprite, i64> = |s| &mut s.frames;
/// let mut sprite = Sprite { frames: 0 };
/// *locator(&mut sprite) = 12;
/// assert_eq!(sprite.frames, 12);
/// ```
pub type Member<T, V> = fn(&mut T) -> &mut V;

/// A field locator tagged with its kind category, for the unified
/// [`add_member`](crate::DataTranslator::add_member) operation.
///
/// The eight variants cover {bool, int, float, string} × {scalar, sequence}.
/// The tag exists because the four representation types are independent
/// parameters and may coincide (a host mapping booleans to `i64` ends up
/// with `B == I`), which rules out dispatching on the locator's value type
/// alone. The per-kind adders on [`DataTranslator`](crate::DataTranslator)
/// remain the primary surface; `MemberRef` is the convenience wrapper for
/// callers that want a single entry point.
pub enum MemberRef<T, B = bool, I = i64, F = f64, S = String> {
    /// Scalar boolean field.
    Bool(Member<T, B>),
    /// Scalar integral field.
    Int(Member<T, I>),
    /// Scalar floating-point field.
    Float(Member<T, F>),
    /// Scalar string field.
    String(Member<T, S>),
    /// Boolean sequence field.
    BoolSequence(Member<T, Vec<B>>),
    /// Integral sequence field.
    IntSequence(Member<T, Vec<I>>),
    /// Floating-point sequence field.
    FloatSequence(Member<T, Vec<F>>),
    /// String sequence field.
    StringSequence(Member<T, Vec<S>>),
}

impl<T, B, I, F, S> MemberRef<T, B, I, F, S> {
    fn kind(&self) -> &'static str {
        match self {
            MemberRef::Bool(_) => "Bool",
            MemberRef::Int(_) => "Int",
            MemberRef::Float(_) => "Float",
            MemberRef::String(_) => "String",
            MemberRef::BoolSequence(_) => "BoolSequence",
            MemberRef::IntSequence(_) => "IntSequence",
            MemberRef::FloatSequence(_) => "FloatSequence",
            MemberRef::StringSequence(_) => "StringSequence",
        }
    }
}

// Manual impls: every variant holds a bare fn pointer, so the usual derive
// bounds on T/B/I/F/S would be spurious.
impl<T, B, I, F, S> Clone for MemberRef<T, B, I, F, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, B, I, F, S> Copy for MemberRef<T, B, I, F, S> {}

impl<T, B, I, F, S> fmt::Debug for MemberRef<T, B, I, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemberRef").field(&self.kind()).finish()
    }
}

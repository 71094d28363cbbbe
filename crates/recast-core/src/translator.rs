//! Binding registry and translation engine
//!
//! [`DataTranslator`] stores named bindings from opaque string keys to fields
//! of one record type, separated into eight kind categories
//! ({bool, int, float, string} × {scalar, sequence}), and populates records
//! by querying any [`ScalarScheme`] for the bound keys. Multi-record
//! extraction additionally requires a [`SequenceScheme`].
//!
//! Copyright (c) 2025 Recast Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::member::{Member, MemberRef};
use crate::scheme::{ScalarScheme, SequenceScheme};

/// Registry of key-to-field bindings for record type `T`, and the engine
/// that resolves them against a data source.
///
/// The four remaining type parameters fix the representation used for
/// boolean, integral, floating-point, and string values; they default to the
/// native Rust choices and only need overriding when translating into
/// foreign-ABI primitive types. A translator only accepts schemes whose
/// associated types match its own, so binding a field and feeding it a
/// mismatched source is a compile error, never a runtime check.
///
/// A translator is built once, typically at startup, and then reused for
/// any number of translation calls:
///
/// ```
/// use recast_core::DataTranslator;
///
/// #[derive(Default)]
/// struct Settings {
///     workers: i64,
///     verbose: bool,
/// }
///
/// let translator = DataTranslator::<Settings>::new()
///     .add_int_member("pool.workers", |s| &mut s.workers)
///     .add_bool_member("log.verbose", |s| &mut s.verbose);
///
/// assert_eq!(translator.member_count(), 2);
/// assert!(translator.has_member("pool.workers"));
/// ```
///
/// Keys are unique within one kind category; registering a second binding
/// under the same key in the same category overwrites the first. The same
/// key string may exist independently in several categories. Translation
/// only reads the registry, so a built translator can be shared freely
/// across threads.
pub struct DataTranslator<T, B = bool, I = i64, F = f64, S = String> {
    bool_members: HashMap<String, Member<T, B>>,
    int_members: HashMap<String, Member<T, I>>,
    float_members: HashMap<String, Member<T, F>>,
    string_members: HashMap<String, Member<T, S>>,

    bool_sequence_members: HashMap<String, Member<T, Vec<B>>>,
    int_sequence_members: HashMap<String, Member<T, Vec<I>>>,
    float_sequence_members: HashMap<String, Member<T, Vec<F>>>,
    string_sequence_members: HashMap<String, Member<T, Vec<S>>>,
}

impl<T, B, I, F, S> DataTranslator<T, B, I, F, S> {
    /// Creates an empty translator with no bindings.
    pub fn new() -> Self {
        Self {
            bool_members: HashMap::new(),
            int_members: HashMap::new(),
            float_members: HashMap::new(),
            string_members: HashMap::new(),
            bool_sequence_members: HashMap::new(),
            int_sequence_members: HashMap::new(),
            float_sequence_members: HashMap::new(),
            string_sequence_members: HashMap::new(),
        }
    }

    /// Total number of bindings across all eight kind categories.
    pub fn member_count(&self) -> usize {
        self.bool_members.len()
            + self.int_members.len()
            + self.float_members.len()
            + self.string_members.len()
            + self.bool_sequence_members.len()
            + self.int_sequence_members.len()
            + self.float_sequence_members.len()
            + self.string_sequence_members.len()
    }

    /// Whether `key` is bound in any category.
    ///
    /// Existence probing only; this does not reveal which kind the key is
    /// bound under.
    pub fn has_member(&self, key: &str) -> bool {
        self.bool_members.contains_key(key)
            || self.int_members.contains_key(key)
            || self.float_members.contains_key(key)
            || self.string_members.contains_key(key)
            || self.bool_sequence_members.contains_key(key)
            || self.int_sequence_members.contains_key(key)
            || self.float_sequence_members.contains_key(key)
            || self.string_sequence_members.contains_key(key)
    }

    /// Whether the translator holds no bindings at all.
    pub fn is_empty(&self) -> bool {
        self.member_count() == 0
    }

    /// Binds `key` to a scalar boolean field. Chainable.
    pub fn add_bool_member(mut self, key: impl Into<String>, member: Member<T, B>) -> Self {
        self.bool_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to a scalar integral field. Chainable.
    pub fn add_int_member(mut self, key: impl Into<String>, member: Member<T, I>) -> Self {
        self.int_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to a scalar floating-point field. Chainable.
    pub fn add_float_member(mut self, key: impl Into<String>, member: Member<T, F>) -> Self {
        self.float_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to a scalar string field. Chainable.
    pub fn add_string_member(mut self, key: impl Into<String>, member: Member<T, S>) -> Self {
        self.string_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to a boolean sequence field. Chainable.
    pub fn add_bool_sequence_member(
        mut self,
        key: impl Into<String>,
        member: Member<T, Vec<B>>,
    ) -> Self {
        self.bool_sequence_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to an integral sequence field. Chainable.
    pub fn add_int_sequence_member(
        mut self,
        key: impl Into<String>,
        member: Member<T, Vec<I>>,
    ) -> Self {
        self.int_sequence_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to a floating-point sequence field. Chainable.
    pub fn add_float_sequence_member(
        mut self,
        key: impl Into<String>,
        member: Member<T, Vec<F>>,
    ) -> Self {
        self.float_sequence_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to a string sequence field. Chainable.
    pub fn add_string_sequence_member(
        mut self,
        key: impl Into<String>,
        member: Member<T, Vec<S>>,
    ) -> Self {
        self.string_sequence_members.insert(key.into(), member);
        self
    }

    /// Binds `key` to the field named by `member`, dispatching on the
    /// locator's kind tag.
    ///
    /// Equivalent to calling the matching verbose loader; exists so call
    /// sites that build bindings from data can use one entry point.
    pub fn add_member(self, key: impl Into<String>, member: MemberRef<T, B, I, F, S>) -> Self {
        match member {
            MemberRef::Bool(m) => self.add_bool_member(key, m),
            MemberRef::Int(m) => self.add_int_member(key, m),
            MemberRef::Float(m) => self.add_float_member(key, m),
            MemberRef::String(m) => self.add_string_member(key, m),
            MemberRef::BoolSequence(m) => self.add_bool_sequence_member(key, m),
            MemberRef::IntSequence(m) => self.add_int_sequence_member(key, m),
            MemberRef::FloatSequence(m) => self.add_float_sequence_member(key, m),
            MemberRef::StringSequence(m) => self.add_string_sequence_member(key, m),
        }
    }

    /// Populates `target`'s bound fields from `scheme`.
    ///
    /// Every binding whose key the scheme reports present is resolved: scalar
    /// fields are overwritten with the fetched value, and sequence fields
    /// have the scheme's elements appended in emission order. Absent keys are
    /// silently skipped and leave the field untouched.
    ///
    /// # Returns
    ///
    /// The number of bindings actually written. A present key whose sequence
    /// holds zero elements still counts: existence is what is counted, not
    /// non-emptiness.
    ///
    /// # Errors
    ///
    /// Only the scheme can fail. Whatever error its lookup or conversion
    /// produces is returned unchanged; fields written before the failure
    /// keep their new values.
    ///
    /// # Idempotence
    ///
    /// Scalar fields are overwritten, so re-translating the same record is
    /// idempotent for scalar bindings. Sequence fields are *appended to and
    /// never cleared*, so re-translating without resetting the record
    /// duplicates their elements. Pass freshly-default-constructed records
    /// when repeatable results are required.
    pub fn translate<D>(&self, target: &mut T, scheme: &D) -> Result<usize, D::Error>
    where
        D: ScalarScheme<Bool = B, Int = I, Float = F, Str = S>,
    {
        let mut written = self.translate_scalars(target, scheme)?;
        written += self.translate_sequences(target, scheme)?;
        trace!(
            "translated {written} of {} bound members",
            self.member_count()
        );
        Ok(written)
    }

    /// Populates every record in `targets` from the same scheme with the
    /// same bindings.
    ///
    /// Repeated lookups across iterations are entirely source-defined: a
    /// stateless scheme yields identical records. This operation requires
    /// only [`ScalarScheme`], so it can never advance a record cursor.
    ///
    /// Returns the representative per-record written count: the first
    /// record's, or 0 for an empty slice.
    pub fn translate_uniform<D>(&self, targets: &mut [T], scheme: &D) -> Result<usize, D::Error>
    where
        D: ScalarScheme<Bool = B, Int = I, Float = F, Str = S>,
    {
        let mut representative = 0;
        for (index, target) in targets.iter_mut().enumerate() {
            let written = self.translate(target, scheme)?;
            if index == 0 {
                representative = written;
            }
        }
        Ok(representative)
    }

    /// Extracts every remaining record from a sequence-capable scheme.
    ///
    /// Repeatedly advances the scheme with [`next`](SequenceScheme::next);
    /// for each successful advance a record is default-constructed,
    /// translated against the current source state, and appended to `out`.
    /// A scheme whose first `next` returns `false` produces nothing.
    ///
    /// Returns the summed written count across all produced records.
    pub fn translate_sequence<D, Out>(&self, out: &mut Out, scheme: &mut D) -> Result<usize, D::Error>
    where
        T: Default,
        D: SequenceScheme<Bool = B, Int = I, Float = F, Str = S>,
        Out: Extend<T>,
    {
        self.extract(out, usize::MAX, scheme)
    }

    /// [`translate_sequence`](Self::translate_sequence) with an upper bound:
    /// extraction stops after `max_size` records even if the scheme has
    /// more, and the scheme is advanced at most `max_size` times.
    pub fn translate_sequence_bounded<D, Out>(
        &self,
        out: &mut Out,
        max_size: usize,
        scheme: &mut D,
    ) -> Result<usize, D::Error>
    where
        T: Default,
        D: SequenceScheme<Bool = B, Int = I, Float = F, Str = S>,
        Out: Extend<T>,
    {
        self.extract(out, max_size, scheme)
    }

    fn extract<D, Out>(
        &self,
        out: &mut Out,
        max_size: usize,
        scheme: &mut D,
    ) -> Result<usize, D::Error>
    where
        T: Default,
        D: SequenceScheme<Bool = B, Int = I, Float = F, Str = S>,
        Out: Extend<T>,
    {
        let mut total = 0;
        let mut produced = 0;
        while produced < max_size && scheme.next() {
            let mut record = T::default();
            total += self.translate(&mut record, &*scheme)?;
            out.extend(std::iter::once(record));
            produced += 1;
        }
        debug!("sequence extraction produced {produced} records ({total} members written)");
        Ok(total)
    }

    fn translate_scalars<D>(&self, target: &mut T, scheme: &D) -> Result<usize, D::Error>
    where
        D: ScalarScheme<Bool = B, Int = I, Float = F, Str = S>,
    {
        let mut written = 0;

        for (key, member) in &self.bool_members {
            if scheme.has(key) {
                *member(target) = scheme.as_bool(key)?;
                written += 1;
            }
        }
        for (key, member) in &self.int_members {
            if scheme.has(key) {
                *member(target) = scheme.as_int(key)?;
                written += 1;
            }
        }
        for (key, member) in &self.float_members {
            if scheme.has(key) {
                *member(target) = scheme.as_float(key)?;
                written += 1;
            }
        }
        for (key, member) in &self.string_members {
            if scheme.has(key) {
                *member(target) = scheme.as_string(key)?;
                written += 1;
            }
        }

        Ok(written)
    }

    fn translate_sequences<D>(&self, target: &mut T, scheme: &D) -> Result<usize, D::Error>
    where
        D: ScalarScheme<Bool = B, Int = I, Float = F, Str = S>,
    {
        let mut written = 0;

        for (key, member) in &self.bool_sequence_members {
            if scheme.has(key) {
                let field = member(target);
                field.reserve(scheme.size(key));
                scheme.as_bool_sequence(key, |value| field.push(value))?;
                written += 1;
            }
        }
        for (key, member) in &self.int_sequence_members {
            if scheme.has(key) {
                let field = member(target);
                field.reserve(scheme.size(key));
                scheme.as_int_sequence(key, |value| field.push(value))?;
                written += 1;
            }
        }
        for (key, member) in &self.float_sequence_members {
            if scheme.has(key) {
                let field = member(target);
                field.reserve(scheme.size(key));
                scheme.as_float_sequence(key, |value| field.push(value))?;
                written += 1;
            }
        }
        for (key, member) in &self.string_sequence_members {
            if scheme.has(key) {
                let field = member(target);
                field.reserve(scheme.size(key));
                scheme.as_string_sequence(key, |value| field.push(value))?;
                written += 1;
            }
        }

        Ok(written)
    }
}

impl<T, B, I, F, S> Default for DataTranslator<T, B, I, F, S> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: the tables hold bare fn pointers, so the usual derive bounds
// on the type parameters would be spurious.
impl<T, B, I, F, S> Clone for DataTranslator<T, B, I, F, S> {
    fn clone(&self) -> Self {
        Self {
            bool_members: self.bool_members.clone(),
            int_members: self.int_members.clone(),
            float_members: self.float_members.clone(),
            string_members: self.string_members.clone(),
            bool_sequence_members: self.bool_sequence_members.clone(),
            int_sequence_members: self.int_sequence_members.clone(),
            float_sequence_members: self.float_sequence_members.clone(),
            string_sequence_members: self.string_sequence_members.clone(),
        }
    }
}

impl<T, B, I, F, S> fmt::Debug for DataTranslator<T, B, I, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scalar = self.bool_members.len()
            + self.int_members.len()
            + self.float_members.len()
            + self.string_members.len();
        f.debug_struct("DataTranslator")
            .field("scalar_members", &scalar)
            .field("sequence_members", &(self.member_count() - scalar))
            .finish()
    }
}

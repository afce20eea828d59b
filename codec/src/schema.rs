//! Record schemas: compilation, caching, and the compiled encode/decode procedures.

use crate::error::{DecodeError, SchemaError};
use crate::shape::{Classification, classify};
use crate::value::FieldValue;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::{Map, Value};
use std::any::TypeId;
use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

type EncodeFn<R> = Arc<dyn Fn(&R) -> Result<Value, SchemaError> + Send + Sync>;
type DecodeFn<R> = Arc<dyn Fn(&mut R, Option<&Value>) -> Result<(), DecodeError> + Send + Sync>;

/// A fixed-shape structured type that can be converted to and from a JSON object.
///
/// Usually implemented through [`crate::record!`], which also writes the struct itself.
/// Hand-written implementations declare their fields in [`Record::describe`] and hand out a
/// `static` [`SchemaCell`] from [`Record::schema_cell`]:
///
/// ```
/// use ytdata_codec::{Record, SchemaBuilder, SchemaCell};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Record for Point {
///     const NAME: &'static str = "Point";
///
///     fn describe(schema: &mut SchemaBuilder<Self>) {
///         schema.field("x", |p| &p.x, |p| &mut p.x, None);
///         schema.field("y", |p| &p.y, |p| &mut p.y, Some(|| 0));
///     }
///
///     fn schema_cell() -> &'static SchemaCell<Self> {
///         static CELL: SchemaCell<Point> = SchemaCell::new();
///         &CELL
///     }
/// }
///
/// let map = serde_json::json!({"x": "3"});
/// let p = Point::decode(map.as_object().unwrap()).unwrap();
/// assert_eq!(p, Point { x: 3, y: 0 });
/// ```
pub trait Record: Default + Send + Sync + 'static {
    /// The type's name, as it appears in errors.
    const NAME: &'static str;

    /// Declares the type's fields and ancestors.
    fn describe(schema: &mut SchemaBuilder<Self>);

    fn schema_cell() -> &'static SchemaCell<Self>;

    /// The compiled schema, compiling it on first use.
    fn schema() -> Result<&'static Schema<Self>, SchemaError> {
        Self::schema_cell().get_or_compile()
    }

    fn encode(&self) -> Result<Map<String, Value>, SchemaError> {
        Self::schema()?.encode(self)
    }

    fn decode(map: &Map<String, Value>) -> Result<Self, DecodeError> {
        Self::schema()?.decode(map)
    }
}

/// Per-type storage for a compiled schema, or for the error that prevented compiling it.
pub struct SchemaCell<R>(OnceLock<Result<Schema<R>, SchemaError>>);

impl<R> SchemaCell<R> {
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Whether compilation has already run (successfully or not).
    pub fn is_compiled(&self) -> bool {
        self.0.get().is_some()
    }
}

impl<R> Default for SchemaCell<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> SchemaCell<R> {
    pub fn get_or_compile(&'static self) -> Result<&'static Schema<R>, SchemaError> {
        if let Some(compiled) = self.0.get() {
            return compiled.as_ref().map_err(Clone::clone);
        }
        let _lock = compile_lock();
        self.0
            .get_or_init(|| {
                let _guard = InProgress::enter(TypeId::of::<R>());
                compile::<R>()
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

thread_local! {
    static IN_PROGRESS: RefCell<Vec<TypeId>> = const { RefCell::new(Vec::new()) };
}

/// Serializes first-time compilation across threads.
///
/// Nested record types are compiled from inside their parent's cell initializer, so two threads
/// compiling mutually recursive types each from its own end would otherwise wait on each other's
/// cell forever. A thread that is already compiling holds the lock and does not take it again.
static COMPILING: Mutex<()> = Mutex::new(());

fn compile_lock() -> Option<MutexGuard<'static, ()>> {
    if IN_PROGRESS.with_borrow(|stack| !stack.is_empty()) {
        return None;
    }
    Some(COMPILING.lock().unwrap_or_else(PoisonError::into_inner))
}

/// Marks a type as being compiled on this thread for as long as it is alive.
struct InProgress(TypeId);

impl InProgress {
    fn enter(id: TypeId) -> Self {
        IN_PROGRESS.with_borrow_mut(|stack| stack.push(id));
        Self(id)
    }

    fn contains(id: TypeId) -> bool {
        IN_PROGRESS.with_borrow(|stack| stack.contains(&id))
    }
}

impl Drop for InProgress {
    fn drop(&mut self) {
        IN_PROGRESS.with_borrow_mut(|stack| {
            if let Some(at) = stack.iter().rposition(|id| *id == self.0) {
                stack.remove(at);
            }
        });
    }
}

/// Compiles `R` unless this thread is already in the middle of compiling it.
///
/// A record that (transitively) contains itself is compiled once, by the outermost call; the
/// inner references are resolved when data first flows through them.
pub(crate) fn ensure_compiled<R: Record>() -> Result<(), SchemaError> {
    if InProgress::contains(TypeId::of::<R>()) {
        return Ok(());
    }
    R::schema().map(|_| ())
}

fn compile<R: Record>() -> Result<Schema<R>, SchemaError> {
    let mut builder = SchemaBuilder::new(R::NAME);
    R::describe(&mut builder);
    let schema = builder.finish();
    match &schema {
        Ok(schema) => {
            tracing::trace!(record = R::NAME, fields = schema.len(), "compiled record schema")
        }
        Err(e) => tracing::debug!(record = R::NAME, error = %e, "record schema is invalid"),
    }
    schema
}

/// One compiled field: its wire name, its classification, and its converters.
pub struct Field<R> {
    name: &'static str,
    owner: &'static str,
    classification: Classification,
    has_default: bool,
    encode: EncodeFn<R>,
    decode: DecodeFn<R>,
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            owner: self.owner,
            classification: self.classification,
            has_default: self.has_default,
            encode: Arc::clone(&self.encode),
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<R> Field<R> {
    /// The field's key in encoded maps.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The record type that declares the field.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn is_optional(&self) -> bool {
        self.classification.optional
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("classification", &self.classification)
            .field("has_default", &self.has_default)
            .finish_non_exhaustive()
    }
}

/// The compiled, ordered description of a record type's fields.
///
/// Immutable once built. Fields declared by the type itself come first, in declaration order,
/// followed by the fields of each ancestor that the type does not shadow.
pub struct Schema<R> {
    name: &'static str,
    fields: IndexMap<&'static str, Field<R>>,
}

impl<R> Schema<R> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field<R>> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field<R>> {
        self.fields.values()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// Writes every field of `record` into a map, in schema order.
    pub fn encode(&self, record: &R) -> Result<Map<String, Value>, SchemaError> {
        let mut map = Map::with_capacity(self.fields.len());
        for field in self.fields.values() {
            map.insert(field.name.to_string(), (field.encode)(record)?);
        }
        Ok(map)
    }
}

impl<R: Default> Schema<R> {
    /// Builds a record from a map. Keys the schema does not know are ignored.
    pub fn decode(&self, map: &Map<String, Value>) -> Result<R, DecodeError> {
        let mut record = R::default();
        for field in self.fields.values() {
            (field.decode)(&mut record, map.get(field.name))?;
        }
        Ok(record)
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields.values().collect::<Vec<_>>())
            .finish()
    }
}

/// Collects the field declarations of a record type; see [`Record::describe`].
pub struct SchemaBuilder<R> {
    name: &'static str,
    own: Vec<Field<R>>,
    inherited: Vec<Field<R>>,
    error: Option<SchemaError>,
}

impl<R: Record> SchemaBuilder<R> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            own: Vec::new(),
            inherited: Vec::new(),
            error: None,
        }
    }

    /// Declares a field, stored in the struct at the place the two accessors point to.
    ///
    /// `default` is used when decoding a map in which the field is absent or `null`.
    pub fn field<V: FieldValue>(
        &mut self,
        name: &'static str,
        get: fn(&R) -> &V,
        get_mut: fn(&mut R) -> &mut V,
        default: Option<fn() -> V>,
    ) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let owner = self.name;
        let classification = match classify(owner, name, &V::shape()) {
            Ok(c) => c,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };

        let encode = move |record: &R| get(record).to_value();
        let decode = move |record: &mut R, raw: Option<&Value>| -> Result<(), DecodeError> {
            let value = match raw {
                Some(raw) if !raw.is_null() => {
                    V::from_value(raw).map_err(|e| e.in_field(owner, name))?
                }
                _ => match default {
                    Some(default) => default(),
                    None => V::absent().ok_or_else(|| DecodeError::missing(owner, name))?,
                },
            };
            *get_mut(record) = value;
            Ok(())
        };

        self.own.push(Field {
            name,
            owner,
            classification,
            has_default: default.is_some(),
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        });
        self
    }

    /// Declares an ancestor, embedded in the struct at the place the two accessors point to.
    ///
    /// The ancestor's fields become fields of this type, except those this type declares itself.
    pub fn inherit<B: Record>(
        &mut self,
        get: fn(&R) -> &B,
        get_mut: fn(&mut R) -> &mut B,
    ) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let base = match B::schema() {
            Ok(base) => base,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };

        let derived = self.name;
        for field in base.fields() {
            let (encode, decode) = (Arc::clone(&field.encode), Arc::clone(&field.decode));
            let from = field.owner;
            self.inherited.push(Field {
                name: field.name,
                owner: derived,
                classification: field.classification,
                has_default: field.has_default,
                encode: Arc::new(move |record: &R| encode(get(record))),
                decode: Arc::new(move |record: &mut R, raw: Option<&Value>| {
                    decode(get_mut(record), raw).map_err(|e| e.inherited_by(from, derived))
                }),
            });
        }
        self
    }

    fn finish(self) -> Result<Schema<R>, SchemaError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Ok(Schema {
            name: self.name,
            fields: merge(self.name, self.own, self.inherited)?,
        })
    }
}

/// Combines a type's own fields with the fields of its ancestors.
///
/// Own fields must have unique names. An ancestor field is dropped when a field of the same
/// name is already present, whether declared by the type itself or by an earlier ancestor.
fn merge<R>(
    record: &'static str,
    own: Vec<Field<R>>,
    inherited: Vec<Field<R>>,
) -> Result<IndexMap<&'static str, Field<R>>, SchemaError> {
    let mut fields = IndexMap::with_capacity(own.len() + inherited.len());
    for field in own {
        match fields.entry(field.name) {
            Entry::Occupied(_) => {
                return Err(SchemaError::DuplicateField {
                    record,
                    field: field.name,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(field);
            }
        }
    }
    for field in inherited {
        fields.entry(field.name).or_insert(field);
    }
    Ok(fields)
}

use chrono::NaiveDate;

/// Kind of a record field (drives how filter values are parsed and compared)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Floating point amount (cost, price, value)
    Number,
    /// Whole number (quantity, thresholds)
    Integer,
    /// Flag
    Boolean,
    /// Calendar date, `YYYY-MM-DD` on the wire
    Date,
    /// Text restricted to a fixed option set
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Options of an enum field, empty for every other kind
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Enum(options) => options,
            _ => &[],
        }
    }

    /// Numeric kinds can be summed
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Integer)
    }
}

/// Definition of a single record field
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Wire identifier used in filter maps (e.g. "minStock")
    pub id: &'static str,
    /// Human-readable label (e.g. "Stock Mínimo")
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(id: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self { id, name, kind }
    }
}

/// Static field schema of a record type
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    /// Schema identifier (e.g. "a001_product")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Every field a filter may reference
    pub fields: &'static [FieldDef],
    /// Fields scanned by the free-text query
    pub search_fields: &'static [&'static str],
}

impl RecordSchema {
    /// Look up a field definition; `None` means the field is unknown to this schema
    pub fn field(&self, field_id: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn is_known(&self, field_id: &str) -> bool {
        self.field(field_id).is_some()
    }

    /// Label for a field id, falling back to the id itself
    pub fn label<'a>(&self, field_id: &'a str) -> &'a str {
        match self.field(field_id) {
            Some(def) => def.name,
            None => field_id,
        }
    }
}

/// Parse a wire date (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

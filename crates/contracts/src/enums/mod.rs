pub mod attribute_type;
pub mod category_type;

pub use attribute_type::AttributeType;
pub use category_type::CategoryType;

use thiserror::Error;

/// A hard error raised while decomposing a user-supplied query template.
///
/// Templates that merely contain constructs the compiler cannot rewrite around are not errors;
/// they degrade to sending the template unmodified. This type is reserved for templates that are
/// structurally unusable.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("query template does not contain a top-level SELECT")]
    MissingSelect,
    #[error("query template does not contain a braced graph pattern")]
    MissingGraphPattern,
}

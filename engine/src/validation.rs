/// A check over one kind of input, reporting a typed error.
///
/// Theme registration runs descriptors through implementations of this trait
/// before they reach the registry; a descriptor validator delegates to the
/// name, variant and custom property validators.
///
/// `T` may be unsized, so validators over `str` take `&str` directly.
///
/// ```ignore
/// use engine::theme::validation::ThemeNameValidator;
/// use engine::validation::Validator;
///
/// assert!(ThemeNameValidator.validate("corporate").is_ok());
/// assert!(ThemeNameValidator.validate("corporate blue").is_err());
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

use lazy_static::lazy_static;
use ron::extensions::Extensions;

lazy_static! {
    /// RON options used for config files. `IMPLICIT_SOME` lets `region: "us-east-1"` stand in for `Some(..)`.
    pub static ref RON: ron::Options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
}

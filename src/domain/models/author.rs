#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Author {
    #[strum(to_string = "You")]
    User,
    #[strum(to_string = "Fashion Assistant")]
    Assistant,
}

use log::trace;

/// Name used when no username is given.
pub const DEFAULT_USERNAME: &str = "World";

/// Greet a given user, or the world when no user is given.
///
/// An empty username is still a username: `greet(Some(""))` is `"Hello !"`.
pub fn greet(username: Option<&str>) -> String {
    if username.is_none() {
        trace!("No username given, greeting {DEFAULT_USERNAME}");
    }

    format!("Hello {}!", username.unwrap_or(DEFAULT_USERNAME))
}

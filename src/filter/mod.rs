use serde_json::Value;

use crate::compdb::{BuildEntry, CompileDatabase};

/// Flags clang-tidy cannot parse. Matched against whole tokens only.
pub const DENYLIST: [&str; 2] = ["-fconcepts", "-fcoroutines"];

/// Returns `true` if `token` is exactly one of the [`DENYLIST`] flags.
pub fn is_denied(token: &str) -> bool {
    DENYLIST.contains(&token)
}

/// Token break: Unicode whitespace or one of the ASCII information separators
/// `\x1c`..=`\x1f`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Remove denylisted tokens from a shell-style command string.
///
/// The command is split on whitespace and rejoined with single spaces, so
/// runs of whitespace collapse even when nothing is removed. Quoting is not
/// interpreted.
pub fn strip_command(command: &str) -> String {
    command
        .split(is_separator)
        .filter(|token| !token.is_empty() && !is_denied(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove denylisted elements from an `arguments` list, keeping the order of
/// the rest. Non-string elements are kept.
pub fn strip_arguments(arguments: &mut Vec<Value>) {
    arguments.retain(|arg| !arg.as_str().is_some_and(is_denied));
}

/// Strip one entry in place.
///
/// A non-empty `command` string takes precedence: when present, `arguments`
/// is left as is. Otherwise `arguments` is filtered if it is an array. An
/// entry with neither is not touched.
pub fn strip_entry(entry: &mut BuildEntry) {
    if let Some(command) = entry.command()
        && !command.is_empty()
    {
        let stripped = strip_command(command);
        entry.set_command(stripped);
        return;
    }

    if let Some(arguments) = entry.arguments_mut() {
        strip_arguments(arguments);
    }
}

/// Strip every entry of `db` in place. Entries are independent; order and
/// length are unchanged.
pub fn strip_database(db: &mut CompileDatabase) {
    db.entries.iter_mut().for_each(strip_entry);
}

/// Owned form of [`strip_database`].
pub fn filter(mut db: CompileDatabase) -> CompileDatabase {
    strip_database(&mut db);
    db
}

/// `data-state` value for anything that opens and closes.
pub fn open_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

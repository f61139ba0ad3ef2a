/// Rewrites each `?` outside single-quoted literals to `$n`, numbering from
/// `start + 1`.
pub(super) fn number_placeholders(sql: &str, start: usize) -> String {
    let mut ret = String::with_capacity(sql.len() + 8);
    let mut n = start;
    let mut quoted = false;

    for c in sql.chars() {
        match c {
            '\'' => {
                quoted = !quoted;
                ret.push(c);
            }
            '?' if !quoted => {
                n += 1;
                ret.push('$');
                ret.push_str(&n.to_string());
            }
            _ => ret.push(c),
        }
    }

    ret
}

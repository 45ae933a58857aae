/// Fill positional `{0}`, `{1}`, ... placeholders of a format template
///
/// `{{` and `}}` produce literal braces. Placeholders without a matching
/// argument are left untouched.
pub fn fill_template(template: &str, args: &[usize]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find(['{', '}']) {
        filled.push_str(&rest[..at]);
        rest = &rest[at..];

        if rest.starts_with("{{") || rest.starts_with("}}") {
            filled.push_str(&rest[..1]);
            rest = &rest[2..];
            continue;
        }

        let argument = rest
            .strip_prefix('{')
            .and_then(|tail| tail.split_once('}'))
            .and_then(|(position, _)| {
                let value = args.get(position.parse::<usize>().ok()?)?;
                Some((position.len(), value))
            });

        match argument {
            Some((position_len, value)) => {
                filled.push_str(&value.to_string());
                rest = &rest[position_len + 2..];
            }
            None => {
                filled.push_str(&rest[..1]);
                rest = &rest[1..];
            }
        }
    }

    filled.push_str(rest);
    filled
}

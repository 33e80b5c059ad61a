use super::Arg;
use super::spec::{Align, Kind, Spec};

const DEFAULT_FIXED_PRECISION: usize = 6;

/// Formats `template`, replacing each `{}` field with one of `args`. See the
/// [module documentation](crate::string::format) for the syntax.
///
/// Fields that can't be formatted are copied to the output unchanged, so this never fails.
///
/// # Examples
/// ```
/// use container_lib::string::format::{Arg, format};
///
/// let args = [Arg::from("width"), Arg::from(42)];
/// assert_eq!(format("{0}: {1:<5}|", &args), "width: 42   |");
/// assert_eq!(format("{{{}}}", &args), "{width}");
/// ```
pub fn format(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next_arg = 0;

    while let Some(brace) = rest.find(['{', '}']) {
        out.push_str(&rest[..brace]);
        let tail = &rest[brace..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if let Some(after) = tail.strip_prefix('}') {
            // A lone closing brace is written as is.
            out.push('}');
            rest = after;
            continue;
        }

        let Some(close) = tail.find('}') else {
            // An unterminated field is written as is.
            rest = tail;
            break;
        };
        let field = &tail[..=close];
        rest = &tail[close + 1..];

        let rendered = Spec::parse(&field[1..close]).and_then(|spec| {
            let index = spec.index.unwrap_or_else(|| {
                next_arg += 1;
                next_arg - 1
            });
            render(&spec, args.get(index)?)
        });

        match rendered {
            Some(rendered) => out.push_str(&rendered),
            None => out.push_str(field),
        }
    }

    out.push_str(rest);
    out
}

/// Renders a single argument, or returns None if `spec` doesn't suit it.
fn render(spec: &Spec, arg: &Arg<'_>) -> Option<String> {
    let (sign, prefix, body) = match (spec.kind, arg) {
        (Kind::Default | Kind::Decimal | Kind::Debug, Arg::Int(i)) => {
            (sign_for(*i < 0, spec), "", i.unsigned_abs().to_string())
        },
        (Kind::Default | Kind::Decimal | Kind::Debug, Arg::Uint(u)) => {
            (sign_for(false, spec), "", u.to_string())
        },
        (Kind::LowerHex | Kind::UpperHex | Kind::Binary | Kind::Octal, Arg::Int(_) | Arg::Uint(_)) => {
            let (negative, magnitude) = match arg {
                Arg::Int(i) => (*i < 0, i.unsigned_abs()),
                Arg::Uint(u) => (false, *u),
                _ => return None,
            };
            let (prefix, body) = radix(spec.kind, magnitude);
            (sign_for(negative, spec), if spec.alternate { prefix } else { "" }, body)
        },
        (Kind::Default | Kind::Debug | Kind::Exponent | Kind::Fixed, Arg::Float(f)) => {
            float(spec, *f)
        },
        (Kind::Exponent | Kind::Fixed, Arg::Int(i)) => float(spec, *i as f64),
        (Kind::Exponent | Kind::Fixed, Arg::Uint(u)) => float(spec, *u as f64),
        (Kind::Char, Arg::Int(_) | Arg::Uint(_)) => {
            let code = match arg {
                Arg::Int(i) => u32::try_from(*i).ok()?,
                Arg::Uint(u) => u32::try_from(*u).ok()?,
                _ => return None,
            };
            ("", "", text(spec, char::from_u32(code)?.to_string()))
        },
        (Kind::Default | Kind::Text | Kind::Char, Arg::Char(c)) => ("", "", text(spec, c.to_string())),
        (Kind::Default | Kind::Text, Arg::Str(s)) => ("", "", text(spec, s.to_string())),
        (Kind::Default | Kind::Text, Arg::Bytes(b)) => ("", "", text(spec, b.to_string())),
        (Kind::Default | Kind::Text | Kind::Debug, Arg::Bool(b)) => ("", "", text(spec, b.to_string())),
        (Kind::Debug, Arg::Str(s)) => ("", "", text(spec, format!("{s:?}"))),
        (Kind::Debug, Arg::Char(c)) => ("", "", text(spec, format!("{c:?}"))),
        (Kind::Debug, Arg::Bytes(b)) => ("", "", text(spec, format!("{b:?}"))),
        _ => return None,
    };

    let numeric = arg.is_number() && spec.kind != Kind::Char;
    Some(pad(spec, numeric, sign, prefix, &body))
}

const fn sign_for(negative: bool, spec: &Spec) -> &'static str {
    match (negative, spec.sign) {
        (true, _) => "-",
        (false, true) => "+",
        (false, false) => "",
    }
}

fn radix(kind: Kind, value: u64) -> (&'static str, String) {
    match kind {
        Kind::LowerHex => ("0x", format!("{value:x}")),
        Kind::UpperHex => ("0x", format!("{value:X}")),
        Kind::Binary => ("0b", format!("{value:b}")),
        _ => ("0o", format!("{value:o}")),
    }
}

fn float(spec: &Spec, value: f64) -> (&'static str, &'static str, String) {
    let magnitude = value.abs();
    let body = match (spec.kind, spec.precision) {
        (Kind::Exponent, Some(precision)) => format!("{magnitude:.precision$e}"),
        (Kind::Exponent, None) => format!("{magnitude:e}"),
        (Kind::Fixed, precision) => {
            let precision = precision.unwrap_or(DEFAULT_FIXED_PRECISION);
            format!("{magnitude:.precision$}")
        },
        (_, Some(precision)) => format!("{magnitude:.precision$}"),
        (_, None) => magnitude.to_string(),
    };

    (sign_for(value.is_sign_negative() && !value.is_nan(), spec), "", body)
}

/// Truncates text to the precision of `spec`, if any.
fn text(spec: &Spec, value: String) -> String {
    match spec.precision {
        Some(precision) => value.chars().take(precision).collect(),
        None => value,
    }
}

/// Pads the rendered parts to the width of `spec`.
fn pad(spec: &Spec, numeric: bool, sign: &str, prefix: &str, body: &str) -> String {
    let len = sign.chars().count() + prefix.chars().count() + body.chars().count();
    let width = spec.width.unwrap_or(0);
    let missing = width.saturating_sub(len);

    if spec.zero && numeric {
        return format!("{sign}{prefix}{}{body}", "0".repeat(missing));
    }

    let default = if numeric { Align::Right } else { Align::Left };
    let (before, after) = match spec.align.unwrap_or(default) {
        Align::Left => (0, missing),
        Align::Right => (missing, 0),
        Align::Center => (missing / 2, missing - missing / 2),
    };

    let fill = |count: usize| spec.fill.to_string().repeat(count);
    format!("{}{sign}{prefix}{body}{}", fill(before), fill(after))
}

use super::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorAttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
    StartsWith { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<SelectorAttrCondition>,
}

impl SelectorStep {
    pub(crate) fn id_only(&self) -> Option<&str> {
        if self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty() {
            self.id.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub(crate) step: SelectorStep,
    // Relation to previous (left) selector part.
    pub(crate) combinator: Option<SelectorCombinator>,
}

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<Vec<SelectorPart>>> {
    let mut groups = Vec::new();
    for group in split_top_level_commas(selector)? {
        groups.push(parse_selector_chain(&group)?);
    }
    if groups.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    Ok(groups)
}

pub(crate) fn parse_selector_chain(selector: &str) -> Result<Vec<SelectorPart>> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    let tokens = tokenize_selector(selector)?;
    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut pending_combinator: Option<SelectorCombinator> = None;

    for token in tokens {
        if token == ">" {
            if pending_combinator.is_some() || parts.is_empty() {
                return Err(Error::UnsupportedSelector(selector.into()));
            }
            pending_combinator = Some(SelectorCombinator::Child);
            continue;
        }

        let step = parse_selector_step(&token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending_combinator.take().unwrap_or(SelectorCombinator::Descendant))
        };
        parts.push(SelectorPart { step, combinator });
    }

    if pending_combinator.is_some() || parts.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    Ok(parts)
}

fn split_top_level_commas(selector: &str) -> Result<Vec<String>> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        if let Some(active) = quote {
            current.push(ch);
            if ch == active {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                if depth == 0 {
                    return Err(Error::UnsupportedSelector(selector.into()));
                }
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                if current.trim().is_empty() {
                    return Err(Error::UnsupportedSelector(selector.into()));
                }
                pieces.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if quote.is_some() || depth != 0 || current.trim().is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    pieces.push(current);
    Ok(pieces)
}

fn tokenize_selector(selector: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        if let Some(active) = quote {
            current.push(ch);
            if ch == active {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => {
                quote = Some(ch);
                current.push(ch);
            }
            '[' => {
                depth += 1;
                current.push(ch);
            }
            ']' => {
                if depth == 0 {
                    return Err(Error::UnsupportedSelector(selector.into()));
                }
                depth -= 1;
                current.push(ch);
            }
            '>' if depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(">".to_string());
            }
            ch if ch.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if quote.is_some() || depth != 0 {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_selector_step(token: &str) -> Result<SelectorStep> {
    let chars: Vec<char> = token.chars().collect();
    let mut step = SelectorStep::default();
    let mut i = 0usize;

    if i < chars.len() && chars[i].is_ascii_alphabetic() {
        let start = i;
        while i < chars.len() && is_ident_char(chars[i]) {
            i += 1;
        }
        step.tag = Some(chars[start..i].iter().collect::<String>().to_ascii_lowercase());
    }

    while i < chars.len() {
        match chars[i] {
            '#' => {
                i += 1;
                let ident = read_ident(&chars, &mut i);
                if ident.is_empty() {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.id = Some(ident);
            }
            '.' => {
                i += 1;
                let ident = read_ident(&chars, &mut i);
                if ident.is_empty() {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.classes.push(ident);
            }
            '[' => {
                i += 1;
                let condition = parse_attr_condition(token, &chars, &mut i)?;
                step.attrs.push(condition);
            }
            _ => return Err(Error::UnsupportedSelector(token.into())),
        }
    }

    if step.tag.is_none() && step.id.is_none() && step.classes.is_empty() && step.attrs.is_empty() {
        return Err(Error::UnsupportedSelector(token.into()));
    }

    Ok(step)
}

fn parse_attr_condition(
    token: &str,
    chars: &[char],
    i: &mut usize,
) -> Result<SelectorAttrCondition> {
    let key = read_ident(chars, i);
    if key.is_empty() {
        return Err(Error::UnsupportedSelector(token.into()));
    }

    match chars.get(*i) {
        Some(']') => {
            *i += 1;
            Ok(SelectorAttrCondition::Exists { key })
        }
        Some('=') => {
            *i += 1;
            let value = read_attr_value(token, chars, i)?;
            Ok(SelectorAttrCondition::Eq { key, value })
        }
        Some('^') if chars.get(*i + 1) == Some(&'=') => {
            *i += 2;
            let value = read_attr_value(token, chars, i)?;
            Ok(SelectorAttrCondition::StartsWith { key, value })
        }
        _ => Err(Error::UnsupportedSelector(token.into())),
    }
}

fn read_attr_value(token: &str, chars: &[char], i: &mut usize) -> Result<String> {
    let mut value = String::new();

    if matches!(chars.get(*i), Some('\'') | Some('"')) {
        let quote = chars[*i];
        *i += 1;
        while *i < chars.len() && chars[*i] != quote {
            value.push(chars[*i]);
            *i += 1;
        }
        if chars.get(*i) != Some(&quote) {
            return Err(Error::UnsupportedSelector(token.into()));
        }
        *i += 1;
    } else {
        while *i < chars.len() && chars[*i] != ']' {
            value.push(chars[*i]);
            *i += 1;
        }
    }

    if chars.get(*i) != Some(&']') {
        return Err(Error::UnsupportedSelector(token.into()));
    }
    *i += 1;
    Ok(value)
}

fn read_ident(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && is_ident_char(chars[*i]) {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

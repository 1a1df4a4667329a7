use std::collections::{HashMap, HashSet};
use std::error::Error as StdError;
use std::fmt;

mod behaviors;
mod observer;
mod selector;
mod validate;

pub use validate::{validate_email, validate_message, FieldError, FieldVerdict};

use behaviors::{DeferredTask, Handler};
use observer::RevealObserver;
use selector::{parse_selector_groups, SelectorAttrCondition, SelectorCombinator, SelectorPart};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    PageRuntime(String),
    SelectorNotFound(String),
    UnsupportedSelector(String),
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::PageRuntime(msg) => write!(f, "page runtime error: {msg}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::TypeMismatch {
                selector,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {selector}: expected {expected}, actual {actual}"
            ),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    node_type: NodeType,
}

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    attrs: HashMap<String, String>,
    value: String,
    disabled: bool,
}

const DEFAULT_BOX_HEIGHT: i64 = 200;
const DEFAULT_VIEWPORT_HEIGHT: i64 = 800;

#[derive(Debug, Clone)]
struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
    id_index: HashMap<String, NodeId>,
}

impl Dom {
    fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    fn create_node(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: HashMap<String, String>,
    ) -> NodeId {
        let value = attrs.get("value").cloned().unwrap_or_default();
        let disabled = attrs.contains_key("disabled");
        let element = Element {
            tag_name,
            attrs,
            value,
            disabled,
        };
        let id = self.create_node(Some(parent), NodeType::Element(element));
        if let Some(id_attr) = self
            .element(id)
            .and_then(|element| element.attrs.get("id").cloned())
        {
            self.id_index.entry(id_attr).or_insert(id);
        }
        id
    }

    fn create_detached_element(&mut self, tag_name: &str) -> NodeId {
        let element = Element {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: HashMap::new(),
            value: String::new(),
            disabled: false,
        };
        self.create_node(None, NodeType::Element(element))
    }

    fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.create_node(Some(parent), NodeType::Text(text))
    }

    fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes[node_id.0].node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node_id.0].node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes[node_id.0].parent
    }

    fn is_valid_node(&self, node_id: NodeId) -> bool {
        node_id.0 < self.nodes.len()
    }

    fn can_have_children(&self, node_id: NodeId) -> bool {
        !matches!(self.nodes[node_id.0].node_type, NodeType::Text(_))
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    fn rebuild_id_index(&mut self) {
        let mut ids = Vec::new();
        self.collect_elements_dfs(self.root, &mut ids);
        let mut index = HashMap::new();
        for node in ids {
            if let Some(id_attr) = self.element(node).and_then(|e| e.attrs.get("id")) {
                index.entry(id_attr.clone()).or_insert(node);
            }
        }
        self.id_index = index;
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.can_have_children(parent) {
            return Err(Error::PageRuntime(
                "append target cannot have children".into(),
            ));
        }
        if child == self.root || child == parent {
            return Err(Error::PageRuntime("invalid append node".into()));
        }
        if !self.is_valid_node(child) {
            return Err(Error::PageRuntime("append node is invalid".into()));
        }

        // Prevent cycles: parent must not be inside child's subtree.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(Error::PageRuntime("append would create a cycle".into()));
            }
            cursor = self.parent(node);
        }

        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.rebuild_id_index();
        Ok(())
    }

    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) -> Result<()> {
        if !self.can_have_children(parent) {
            return Err(Error::PageRuntime(
                "insert target cannot have children".into(),
            ));
        }
        if child == self.root || child == parent {
            return Err(Error::PageRuntime("invalid insert node".into()));
        }
        if !self.is_valid_node(child) || !self.is_valid_node(reference) {
            return Err(Error::PageRuntime("insert node is invalid".into()));
        }
        if self.parent(reference) != Some(parent) {
            return Err(Error::PageRuntime(
                "insert reference is not a direct child".into(),
            ));
        }
        if child == reference {
            return Ok(());
        }

        // Prevent cycles: parent must not be inside child's subtree.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(Error::PageRuntime("insert would create a cycle".into()));
            }
            cursor = self.parent(node);
        }

        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }

        let Some(index) = self.nodes[parent.0]
            .children
            .iter()
            .position(|id| *id == reference)
        else {
            return Err(Error::PageRuntime("insert reference is missing".into()));
        };

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(index, child);
        self.rebuild_id_index();
        Ok(())
    }

    fn remove_node(&mut self, node: NodeId) -> Result<()> {
        if node == self.root {
            return Err(Error::PageRuntime("cannot remove document root".into()));
        }
        let Some(parent) = self.parent(node) else {
            return Ok(());
        };
        self.nodes[parent.0].children.retain(|id| *id != node);
        self.nodes[node.0].parent = None;
        self.rebuild_id_index();
        Ok(())
    }

    fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.element(node_id)
            .and_then(|element| element.attrs.get(name).cloned())
    }

    fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::PageRuntime("attribute target is not an element".into()))?;
        element.attrs.insert(name.to_string(), value.to_string());
        if name == "id" {
            self.rebuild_id_index();
        }
        Ok(())
    }

    fn value(&self, node_id: NodeId) -> String {
        self.element(node_id)
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, node_id: NodeId, value: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::PageRuntime("value target is not an element".into()))?;
        element.value = value.to_string();
        Ok(())
    }

    fn disabled(&self, node_id: NodeId) -> bool {
        self.element(node_id).map(|e| e.disabled).unwrap_or(false)
    }

    fn set_disabled(&mut self, node_id: NodeId, disabled: bool) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::PageRuntime("disabled target is not an element".into()))?;
        element.disabled = disabled;
        Ok(())
    }

    fn class_contains(&self, node_id: NodeId, class_name: &str) -> Result<bool> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::PageRuntime("class target is not an element".into()))?;
        Ok(has_class(element, class_name))
    }

    fn class_add(&mut self, node_id: NodeId, class_name: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::PageRuntime("class target is not an element".into()))?;
        let mut classes = class_tokens(element.attrs.get("class").map(String::as_str));
        if !classes.iter().any(|name| name == class_name) {
            classes.push(class_name.to_string());
        }
        set_class_attr(element, &classes);
        Ok(())
    }

    fn class_remove(&mut self, node_id: NodeId, class_name: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::PageRuntime("class target is not an element".into()))?;
        let mut classes = class_tokens(element.attrs.get("class").map(String::as_str));
        classes.retain(|name| name != class_name);
        set_class_attr(element, &classes);
        Ok(())
    }

    fn class_toggle(&mut self, node_id: NodeId, class_name: &str) -> Result<bool> {
        let has = self.class_contains(node_id, class_name)?;
        if has {
            self.class_remove(node_id, class_name)?;
            Ok(false)
        } else {
            self.class_add(node_id, class_name)?;
            Ok(true)
        }
    }

    fn style_get(&self, node_id: NodeId, property: &str) -> Result<String> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::PageRuntime("style target is not an element".into()))?;
        let decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        Ok(decls
            .iter()
            .find(|(prop, _)| prop == property)
            .map(|(_, value)| value.clone())
            .unwrap_or_default())
    }

    fn style_set(&mut self, node_id: NodeId, property: &str, value: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::PageRuntime("style target is not an element".into()))?;

        let mut decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        if let Some(pos) = decls.iter().position(|(prop, _)| prop == property) {
            if value.is_empty() {
                decls.remove(pos);
            } else {
                decls[pos].1 = value.to_string();
            }
        } else if !value.is_empty() {
            decls.push((property.to_string(), value.to_string()));
        }

        if decls.is_empty() {
            element.attrs.remove("style");
        } else {
            element
                .attrs
                .insert("style".to_string(), serialize_style_declarations(&decls));
        }

        Ok(())
    }

    fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node_id, &mut out);
        out
    }

    fn collect_text(&self, node_id: NodeId, out: &mut String) {
        match &self.nodes[node_id.0].node_type {
            NodeType::Text(text) => out.push_str(text),
            _ => {
                for child in &self.nodes[node_id.0].children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    fn set_text(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        if !self.can_have_children(node_id) {
            return Err(Error::PageRuntime("text target cannot hold children".into()));
        }
        let children = std::mem::take(&mut self.nodes[node_id.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        if !text.is_empty() {
            self.create_text(node_id, text.to_string());
        }
        self.rebuild_id_index();
        Ok(())
    }

    fn collect_elements_dfs(&self, node_id: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.nodes[node_id.0].children {
            if self.element(*child).is_some() {
                out.push(*child);
            }
            self.collect_elements_dfs(*child, out);
        }
    }

    fn descendant_elements(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements_dfs(root, &mut out);
        out
    }

    // Textareas default to their markup text; inputs already took their
    // `value` attribute at creation.
    fn initialize_form_control_values(&mut self) -> Result<()> {
        let nodes = self.descendant_elements(self.root);
        for node in nodes {
            if self.tag_name(node) == Some("textarea") {
                let default = self.text_content(node);
                self.set_value(node, &default)?;
            }
        }
        Ok(())
    }

    fn reset_form_controls(&mut self, form: NodeId) -> Result<()> {
        let nodes = self.descendant_elements(form);
        for node in nodes {
            match self.tag_name(node) {
                Some("input") => {
                    let default = self.attr(node, "value").unwrap_or_default();
                    self.set_value(node, &default)?;
                }
                Some("textarea") => {
                    let default = self.text_content(node);
                    self.set_value(node, &default)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        let all = self.query_selector_all(selector)?;
        Ok(all.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let groups = parse_selector_groups(selector)?;

        if groups.len() == 1 && groups[0].len() == 1 {
            if let Some(id) = groups[0][0].step.id_only() {
                return Ok(self.by_id(id).into_iter().collect());
            }
        }

        let mut ids = Vec::new();
        self.collect_elements_dfs(self.root, &mut ids);

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        for candidate in ids {
            if groups
                .iter()
                .any(|parts| self.matches_selector_chain(candidate, parts))
                && seen.insert(candidate)
            {
                matched.push(candidate);
            }
        }
        Ok(matched)
    }

    fn query_selector_from(&self, root: NodeId, selector: &str) -> Result<Option<NodeId>> {
        let all = self.query_selector_all_from(root, selector)?;
        Ok(all.into_iter().next())
    }

    fn query_selector_all_from(&self, root: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        let groups = parse_selector_groups(selector)?;

        let ids = self.descendant_elements(root);

        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        for candidate in ids {
            if groups
                .iter()
                .any(|parts| self.matches_selector_chain(candidate, parts))
                && seen.insert(candidate)
            {
                matched.push(candidate);
            }
        }
        Ok(matched)
    }

    fn matches_step(&self, node_id: NodeId, step: &selector::SelectorStep) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };
        if let Some(tag) = &step.tag {
            if !element.tag_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &step.id {
            if element.attrs.get("id").map(String::as_str) != Some(id.as_str()) {
                return false;
            }
        }
        for class in &step.classes {
            if !has_class(element, class) {
                return false;
            }
        }
        for condition in &step.attrs {
            match condition {
                SelectorAttrCondition::Exists { key } => {
                    if !element.attrs.contains_key(key) {
                        return false;
                    }
                }
                SelectorAttrCondition::Eq { key, value } => {
                    if element.attrs.get(key).map(String::as_str) != Some(value.as_str()) {
                        return false;
                    }
                }
                SelectorAttrCondition::StartsWith { key, value } => {
                    let Some(actual) = element.attrs.get(key) else {
                        return false;
                    };
                    if !actual.starts_with(value.as_str()) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn matches_selector_chain(&self, node_id: NodeId, parts: &[SelectorPart]) -> bool {
        let Some((last, rest)) = parts.split_last() else {
            return false;
        };
        if !self.matches_step(node_id, &last.step) {
            return false;
        }
        match last.combinator {
            None => rest.is_empty(),
            Some(SelectorCombinator::Descendant) => {
                let mut cursor = self.parent(node_id);
                while let Some(current) = cursor {
                    if self.matches_selector_chain(current, rest) {
                        return true;
                    }
                    cursor = self.parent(current);
                }
                false
            }
            Some(SelectorCombinator::Child) => self
                .parent(node_id)
                .is_some_and(|parent| self.matches_selector_chain(parent, rest)),
        }
    }

    // Geometry is a deterministic vertical stack: every element is as tall as
    // its inline `height` style (else a fixed default) and sits below its
    // preceding element siblings.
    fn box_height(&self, node_id: NodeId) -> i64 {
        let Some(element) = self.element(node_id) else {
            return 0;
        };
        let decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        decls
            .iter()
            .find(|(prop, _)| prop == "height")
            .and_then(|(_, value)| parse_px(value))
            .unwrap_or(DEFAULT_BOX_HEIGHT)
    }

    fn offset_top(&self, node_id: NodeId) -> Result<i64> {
        if self.element(node_id).is_none() {
            return Err(Error::PageRuntime("offset target is not an element".into()));
        }
        let mut top = 0;
        let mut current = node_id;
        while let Some(parent) = self.parent(current) {
            for sibling in &self.nodes[parent.0].children {
                if *sibling == current {
                    break;
                }
                if self.element(*sibling).is_some() {
                    top += self.box_height(*sibling);
                }
            }
            current = parent;
        }
        Ok(top)
    }

    fn body_or_root(&self) -> NodeId {
        self.descendant_elements(self.root)
            .into_iter()
            .find(|id| self.tag_name(*id) == Some("body"))
            .unwrap_or(self.root)
    }

    fn document_height(&self) -> i64 {
        let container = self.body_or_root();
        self.nodes[container.0]
            .children
            .iter()
            .filter(|id| self.element(**id).is_some())
            .map(|id| self.box_height(*id))
            .sum()
    }
}

fn has_class(element: &Element, class_name: &str) -> bool {
    class_tokens(element.attrs.get("class").map(String::as_str))
        .iter()
        .any(|name| name == class_name)
}

fn class_tokens(class_attr: Option<&str>) -> Vec<String> {
    class_attr
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn set_class_attr(element: &mut Element, classes: &[String]) {
    if classes.is_empty() {
        element.attrs.remove("class");
    } else {
        element.attrs.insert("class".to_string(), classes.join(" "));
    }
}

fn parse_style_declarations(style_attr: Option<&str>) -> Vec<(String, String)> {
    let mut decls = Vec::new();
    for piece in style_attr.unwrap_or_default().split(';') {
        let Some((prop, value)) = piece.split_once(':') else {
            continue;
        };
        let prop = prop.trim();
        let value = value.trim();
        if !prop.is_empty() && !value.is_empty() {
            decls.push((prop.to_string(), value.to_string()));
        }
    }
    decls
}

fn serialize_style_declarations(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{prop}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn parse_px(value: &str) -> Option<i64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

fn parse_html(html: &str) -> Result<Dom> {
    let mut dom = Dom::new();

    let mut stack = vec![dom.root];
    let bytes = html.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        if starts_with_at(bytes, i, b"<!--") {
            if let Some(end) = find_subslice(bytes, i + 4, b"-->") {
                i = end + 3;
            } else {
                return Err(Error::HtmlParse("unclosed HTML comment".into()));
            }
            continue;
        }

        if bytes[i] == b'<' {
            if starts_with_at(bytes, i, b"</") {
                let (tag, next) = parse_end_tag(html, i)?;
                i = next;

                while stack.len() > 1 {
                    let top = *stack
                        .last()
                        .ok_or_else(|| Error::HtmlParse("invalid stack state".into()))?;
                    let top_tag = dom.tag_name(top).unwrap_or("");
                    stack.pop();
                    if top_tag.eq_ignore_ascii_case(&tag) {
                        break;
                    }
                }
                continue;
            }

            let (tag, attrs, self_closing, next) = parse_start_tag(html, i)?;
            i = next;

            let parent = *stack
                .last()
                .ok_or_else(|| Error::HtmlParse("missing parent element".into()))?;
            let node = dom.create_element(parent, tag.clone(), attrs);

            if !self_closing && !is_void_tag(&tag) {
                stack.push(node);
            }
            continue;
        }

        let text_start = i;
        while i < bytes.len() && bytes[i] != b'<' {
            i += 1;
        }

        if let Some(text) = html.get(text_start..i) {
            if !text.is_empty() {
                let parent = *stack
                    .last()
                    .ok_or_else(|| Error::HtmlParse("missing parent element".into()))?;
                dom.create_text(parent, text.to_string());
            }
        }
    }

    dom.initialize_form_control_values()?;
    Ok(dom)
}

fn parse_start_tag(
    html: &str,
    at: usize,
) -> Result<(String, HashMap<String, String>, bool, usize)> {
    let bytes = html.as_bytes();
    let mut i = at;
    if bytes.get(i) != Some(&b'<') {
        return Err(Error::HtmlParse("expected '<'".into()));
    }
    i += 1;

    skip_ws(bytes, &mut i);
    let tag_start = i;
    while i < bytes.len() && is_tag_char(bytes[i]) {
        i += 1;
    }

    let tag = html
        .get(tag_start..i)
        .ok_or_else(|| Error::HtmlParse("invalid tag name".into()))?
        .to_ascii_lowercase();

    if tag.is_empty() {
        return Err(Error::HtmlParse("empty tag name".into()));
    }

    let mut attrs = HashMap::new();
    let mut self_closing = false;

    loop {
        skip_ws(bytes, &mut i);
        if i >= bytes.len() {
            return Err(Error::HtmlParse("unclosed start tag".into()));
        }

        if bytes[i] == b'>' {
            i += 1;
            break;
        }

        if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'>' {
            self_closing = true;
            i += 2;
            break;
        }

        let name_start = i;
        while i < bytes.len() && is_attr_name_char(bytes[i]) {
            i += 1;
        }

        let name = html
            .get(name_start..i)
            .ok_or_else(|| Error::HtmlParse("invalid attribute name".into()))?
            .to_ascii_lowercase();

        if name.is_empty() {
            return Err(Error::HtmlParse("invalid attribute name".into()));
        }

        skip_ws(bytes, &mut i);

        let value = if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            skip_ws(bytes, &mut i);
            parse_attr_value(html, bytes, &mut i)?
        } else {
            "true".to_string()
        };

        attrs.insert(name, value);
    }

    Ok((tag, attrs, self_closing, i))
}

fn parse_end_tag(html: &str, at: usize) -> Result<(String, usize)> {
    let bytes = html.as_bytes();
    let mut i = at;

    if !(bytes.get(i) == Some(&b'<') && bytes.get(i + 1) == Some(&b'/')) {
        return Err(Error::HtmlParse("expected end tag".into()));
    }
    i += 2;
    skip_ws(bytes, &mut i);

    let tag_start = i;
    while i < bytes.len() && is_tag_char(bytes[i]) {
        i += 1;
    }

    let tag = html
        .get(tag_start..i)
        .ok_or_else(|| Error::HtmlParse("invalid end tag".into()))?
        .to_ascii_lowercase();

    while i < bytes.len() && bytes[i] != b'>' {
        i += 1;
    }
    if i >= bytes.len() {
        return Err(Error::HtmlParse("unclosed end tag".into()));
    }

    Ok((tag, i + 1))
}

fn parse_attr_value(html: &str, bytes: &[u8], i: &mut usize) -> Result<String> {
    if *i >= bytes.len() {
        return Err(Error::HtmlParse("missing attribute value".into()));
    }

    if bytes[*i] == b'\'' || bytes[*i] == b'"' {
        let quote = bytes[*i];
        *i += 1;
        let start = *i;
        while *i < bytes.len() && bytes[*i] != quote {
            *i += 1;
        }
        if *i >= bytes.len() {
            return Err(Error::HtmlParse("unclosed quoted attribute value".into()));
        }
        let value = html
            .get(start..*i)
            .ok_or_else(|| Error::HtmlParse("invalid attribute value".into()))?
            .to_string();
        *i += 1;
        return Ok(value);
    }

    let start = *i;
    while *i < bytes.len()
        && !bytes[*i].is_ascii_whitespace()
        && bytes[*i] != b'>'
        && !(bytes[*i] == b'/' && *i + 1 < bytes.len() && bytes[*i + 1] == b'>')
    {
        *i += 1;
    }

    let value = html
        .get(start..*i)
        .ok_or_else(|| Error::HtmlParse("invalid attribute value".into()))?
        .to_string();
    Ok(value)
}

fn starts_with_at(bytes: &[u8], at: usize, needle: &[u8]) -> bool {
    bytes.len() >= at + needle.len() && &bytes[at..at + needle.len()] == needle
}

fn find_subslice(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || bytes.len() < needle.len() {
        return None;
    }
    (from..=bytes.len() - needle.len()).find(|&i| &bytes[i..i + needle.len()] == needle)
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn is_tag_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Target {
    Window,
    Node(NodeId),
}

#[derive(Debug, Default)]
struct ListenerStore {
    map: HashMap<Target, HashMap<String, Vec<Handler>>>,
}

impl ListenerStore {
    fn add(&mut self, target: Target, event: &str, handler: Handler) {
        self.map
            .entry(target)
            .or_default()
            .entry(event.to_string())
            .or_default()
            .push(handler);
    }

    fn get(&self, target: Target, event: &str) -> Vec<Handler> {
        self.map
            .get(&target)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

#[derive(Debug, Clone)]
struct EventState {
    default_prevented: bool,
}

impl EventState {
    fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: i64,
    due_at: i64,
    order: i64,
    task: DeferredTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: i64,
    pub due_at: i64,
    pub order: i64,
}

#[derive(Debug, Clone, Copy)]
struct Viewport {
    scroll_y: i64,
    height: i64,
}

#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    pub submit_delay_ms: i64,
    pub notice_lifetime_ms: i64,
    pub scroll_top_threshold: i64,
    pub section_lookahead: i64,
    pub reveal_threshold_permille: i64,
    pub reveal_bottom_margin: i64,
    pub card_stagger_step_ms: i64,
    pub typewriter_speed_ms: i64,
    pub parallax_factor_permille: i64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            notice_lifetime_ms: 5000,
            scroll_top_threshold: 500,
            section_lookahead: 200,
            reveal_threshold_permille: 100,
            reveal_bottom_margin: 100,
            card_stagger_step_ms: 100,
            typewriter_speed_ms: 100,
            parallax_factor_permille: 500,
        }
    }
}

pub struct Page {
    dom: Dom,
    listeners: ListenerStore,
    task_queue: Vec<ScheduledTask>,
    reveal: RevealObserver,
    viewport: Viewport,
    config: BehaviorConfig,
    now_ms: i64,
    timer_step_limit: usize,
    next_timer_id: i64,
    next_task_order: i64,
    trace: bool,
    trace_events: bool,
    trace_timers: bool,
    trace_reveals: bool,
    trace_logs: Vec<String>,
    trace_log_limit: usize,
    trace_to_stderr: bool,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with(html, BehaviorConfig::default())
    }

    pub fn from_html_with(html: &str, config: BehaviorConfig) -> Result<Self> {
        let dom = parse_html(html)?;
        let reveal = RevealObserver::new(
            config.reveal_threshold_permille,
            config.reveal_bottom_margin,
        );
        let mut page = Self {
            dom,
            listeners: ListenerStore::default(),
            task_queue: Vec::new(),
            reveal,
            viewport: Viewport {
                scroll_y: 0,
                height: DEFAULT_VIEWPORT_HEIGHT,
            },
            config,
            now_ms: 0,
            timer_step_limit: 10_000,
            next_timer_id: 1,
            next_task_order: 0,
            trace: false,
            trace_events: true,
            trace_timers: true,
            trace_reveals: true,
            trace_logs: Vec::new(),
            trace_log_limit: 10_000,
            trace_to_stderr: true,
        };
        page.initialize()?;
        Ok(page)
    }

    // Everything the page wires on document-ready, in source order. Safe to
    // call again: listeners are rebuilt from scratch, created controls are
    // found instead of duplicated, and revealed elements are not re-observed.
    pub fn initialize(&mut self) -> Result<()> {
        self.listeners.clear();
        self.init_navigation()?;
        self.init_scroll_reveal()?;
        self.init_contact_form()?;
        self.init_scroll_top()?;
        self.init_mobile_menu()?;
        self.init_card_hover()?;
        self.init_parallax()?;
        self.run_reveal_pass()?;
        Ok(())
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_to_stderr = enabled;
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.trace_events = enabled;
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.trace_timers = enabled;
    }

    pub fn set_trace_reveals(&mut self, enabled: bool) {
        self.trace_reveals = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::PageRuntime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_log_limit = max_entries;
        while self.trace_logs.len() > self.trace_log_limit {
            self.trace_logs.remove(0);
        }
        Ok(())
    }

    pub fn set_timer_step_limit(&mut self, max_steps: usize) -> Result<()> {
        if max_steps == 0 {
            return Err(Error::PageRuntime(
                "set_timer_step_limit requires at least 1 step".into(),
            ));
        }
        self.timer_step_limit = max_steps;
        Ok(())
    }

    pub fn set_viewport_height(&mut self, height: i64) -> Result<()> {
        if height <= 0 {
            return Err(Error::PageRuntime(
                "set_viewport_height requires a positive height".into(),
            ));
        }
        self.viewport.height = height;
        self.run_reveal_pass()
    }

    pub fn viewport_height(&self) -> i64 {
        self.viewport.height
    }

    pub fn scroll_offset(&self) -> i64 {
        self.viewport.scroll_y
    }

    pub fn document_height(&self) -> i64 {
        self.dom.document_height()
    }

    fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }

        let outcome = self.dispatch_event(Target::Node(target), "click")?;
        if outcome.default_prevented {
            return Ok(());
        }

        if is_submit_control(&self.dom, target) {
            if let Some(form) = resolve_form_for_submit(&self.dom, target) {
                self.dispatch_event(Target::Node(form), "submit")?;
            }
            return Ok(());
        }

        // Unprevented in-page anchor: the browser's default jump.
        if let Some(target_id) = in_page_anchor_target(&self.dom, target) {
            if let Some(section) = self.dom.by_id(&target_id) {
                let top = self.dom.offset_top(section)?;
                self.scroll_to(top)?;
            }
        }

        Ok(())
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }

        let tag = self
            .dom
            .tag_name(target)
            .ok_or_else(|| Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: "non-element".into(),
            })?
            .to_ascii_lowercase();

        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        self.dom.set_value(target, text)?;
        self.dispatch_event(Target::Node(target), "input")?;
        Ok(())
    }

    pub fn blur(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(Target::Node(target), "blur")?;
        Ok(())
    }

    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;

        let form = if self
            .dom
            .tag_name(target)
            .map(|t| t.eq_ignore_ascii_case("form"))
            .unwrap_or(false)
        {
            Some(target)
        } else {
            resolve_form_for_submit(&self.dom, target)
        };

        if let Some(form) = form {
            self.dispatch_event(Target::Node(form), "submit")?;
        }

        Ok(())
    }

    pub fn dispatch(&mut self, selector: &str, event: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(Target::Node(target), event)?;
        Ok(())
    }

    pub fn scroll_to(&mut self, offset: i64) -> Result<()> {
        let max_scroll = (self.dom.document_height() - self.viewport.height).max(0);
        let clamped = offset.clamp(0, max_scroll);
        if clamped == self.viewport.scroll_y {
            return Ok(());
        }
        self.viewport.scroll_y = clamped;
        self.trace_event_line(format!("[event] scroll offset={clamped}"));
        self.dispatch_event(Target::Window, "scroll")?;
        self.run_reveal_pass()?;
        Ok(())
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        let mut timers = self
            .task_queue
            .iter()
            .map(|task| PendingTimer {
                id: task.id,
                due_at: task.due_at,
                order: task.order,
            })
            .collect::<Vec<_>>();
        timers.sort_by_key(|timer| (timer.due_at, timer.order));
        timers
    }

    pub fn advance_time(&mut self, delta_ms: i64) -> Result<()> {
        if delta_ms < 0 {
            return Err(Error::PageRuntime(
                "advance_time requires non-negative milliseconds".into(),
            ));
        }
        let from = self.now_ms;
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        let ran = self.run_due_timers_internal()?;
        self.trace_timer_line(format!(
            "[timer] advance delta_ms={} from={} to={} ran_due={}",
            delta_ms, from, self.now_ms, ran
        ));
        Ok(())
    }

    pub fn advance_time_to(&mut self, target_ms: i64) -> Result<()> {
        if target_ms < self.now_ms {
            return Err(Error::PageRuntime(format!(
                "advance_time_to requires target >= now_ms (target={target_ms}, now_ms={})",
                self.now_ms
            )));
        }
        let from = self.now_ms;
        self.now_ms = target_ms;
        let ran = self.run_due_timers_internal()?;
        self.trace_timer_line(format!(
            "[timer] advance_to from={} to={} ran_due={}",
            from, self.now_ms, ran
        ));
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        let from = self.now_ms;
        let ran = self.run_timer_queue(None, true)?;
        self.trace_timer_line(format!(
            "[timer] flush from={} to={} ran={}",
            from, self.now_ms, ran
        ));
        Ok(())
    }

    pub fn run_next_timer(&mut self) -> Result<bool> {
        let Some(next_idx) = self.next_task_index(None) else {
            self.trace_timer_line("[timer] run_next none".into());
            return Ok(false);
        };

        let task = self.task_queue.remove(next_idx);
        if task.due_at > self.now_ms {
            self.now_ms = task.due_at;
        }
        self.execute_timer_task(task)?;
        Ok(true)
    }

    pub fn run_due_timers(&mut self) -> Result<usize> {
        let ran = self.run_due_timers_internal()?;
        self.trace_timer_line(format!(
            "[timer] run_due now_ms={} ran={}",
            self.now_ms, ran
        ));
        Ok(ran)
    }

    fn run_due_timers_internal(&mut self) -> Result<usize> {
        self.run_timer_queue(Some(self.now_ms), false)
    }

    fn run_timer_queue(&mut self, due_limit: Option<i64>, advance_clock: bool) -> Result<usize> {
        let mut steps = 0usize;
        while let Some(next_idx) = self.next_task_index(due_limit) {
            steps += 1;
            if steps > self.timer_step_limit {
                return Err(self.timer_step_limit_error(self.timer_step_limit));
            }
            let task = self.task_queue.remove(next_idx);
            if advance_clock && task.due_at > self.now_ms {
                self.now_ms = task.due_at;
            }
            self.execute_timer_task(task)?;
        }
        Ok(steps)
    }

    fn timer_step_limit_error(&self, max_steps: usize) -> Error {
        Error::PageRuntime(format!(
            "timer queue exceeded {} steps with {} tasks still pending",
            max_steps,
            self.task_queue.len()
        ))
    }

    fn next_task_index(&self, due_limit: Option<i64>) -> Option<usize> {
        self.task_queue
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }

    fn execute_timer_task(&mut self, task: ScheduledTask) -> Result<()> {
        self.trace_timer_line(format!(
            "[timer] run id={} at={} task={}",
            task.id,
            self.now_ms,
            task.task.label()
        ));
        behaviors::run_deferred(self, task.task)
    }

    fn schedule_task(&mut self, delay_ms: i64, task: DeferredTask) -> i64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        let order = self.next_task_order;
        self.next_task_order += 1;
        let due_at = self.now_ms.saturating_add(delay_ms.max(0));
        self.trace_timer_line(format!(
            "[timer] schedule id={id} due_at={due_at} task={}",
            task.label()
        ));
        self.task_queue.push(ScheduledTask {
            id,
            due_at,
            order,
            task,
        });
        id
    }

    fn dispatch_event(&mut self, target: Target, event_type: &str) -> Result<EventState> {
        let mut event = EventState::new();

        let chain = match target {
            Target::Window => vec![Target::Window],
            Target::Node(node) => {
                let mut chain = vec![Target::Node(node)];
                let mut cursor = self.dom.parent(node);
                while let Some(current) = cursor {
                    chain.push(Target::Node(current));
                    cursor = self.dom.parent(current);
                }
                chain
            }
        };

        for hop in chain {
            let handlers = self.listeners.get(hop, event_type);
            if handlers.is_empty() {
                continue;
            }
            let desc = match hop {
                Target::Window => "window".to_string(),
                Target::Node(node) => node_desc(&self.dom, node),
            };
            self.trace_event_line(format!(
                "[event] {event_type} target={desc} handlers={}",
                handlers.len()
            ));
            for handler in handlers {
                behaviors::run_handler(self, handler, &mut event)?;
            }
        }

        Ok(event)
    }

    fn run_reveal_pass(&mut self) -> Result<()> {
        let hits = self.reveal.take_intersecting(&self.dom, self.viewport);
        for node in hits {
            self.dom.class_add(node, "fade-in")?;
            let desc = node_desc(&self.dom, node);
            self.trace_reveal_line(format!("[reveal] {desc}"));
        }
        Ok(())
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual == expected {
            Ok(())
        } else {
            Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: dom_snippet(&self.dom, target),
            })
        }
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target);
        if actual == expected {
            Ok(())
        } else {
            Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: dom_snippet(&self.dom, target),
            })
        }
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        self.select_one(selector).map(|_| ())
    }

    pub fn assert_has_class(&self, selector: &str, class_name: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.class_contains(target, class_name)? {
            Ok(())
        } else {
            Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("class `{class_name}`"),
                actual: self.dom.attr(target, "class").unwrap_or_default(),
                dom_snippet: dom_snippet(&self.dom, target),
            })
        }
    }

    pub fn assert_not_class(&self, selector: &str, class_name: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.class_contains(target, class_name)? {
            Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("no class `{class_name}`"),
                actual: self.dom.attr(target, "class").unwrap_or_default(),
                dom_snippet: dom_snippet(&self.dom, target),
            })
        } else {
            Ok(())
        }
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.dom.query_selector(selector)?.is_some())
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.dom.query_selector_all(selector)?.len())
    }

    pub fn text_of(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.text_content(target))
    }

    pub fn value_of(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.value(target))
    }

    pub fn attr_of(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.dom.attr(target, name))
    }

    pub fn style_of(&self, selector: &str, property: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.style_get(target, property)
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        self.dom.class_contains(target, class_name)
    }

    pub fn disabled_of(&self, selector: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.dom.disabled(target))
    }

    fn trace_line(&mut self, line: String) {
        if self.trace_to_stderr {
            eprintln!("{line}");
        }
        if self.trace_logs.len() >= self.trace_log_limit {
            self.trace_logs.remove(0);
        }
        self.trace_logs.push(line);
    }

    fn trace_event_line(&mut self, line: String) {
        if self.trace && self.trace_events {
            self.trace_line(line);
        }
    }

    fn trace_timer_line(&mut self, line: String) {
        if self.trace && self.trace_timers {
            self.trace_line(line);
        }
    }

    fn trace_reveal_line(&mut self, line: String) {
        if self.trace && self.trace_reveals {
            self.trace_line(line);
        }
    }
}

fn is_submit_control(dom: &Dom, node: NodeId) -> bool {
    match dom.tag_name(node) {
        Some("button") => dom
            .attr(node, "type")
            .map(|t| t.eq_ignore_ascii_case("submit"))
            .unwrap_or(true),
        Some("input") => dom
            .attr(node, "type")
            .map(|t| t.eq_ignore_ascii_case("submit"))
            .unwrap_or(false),
        _ => false,
    }
}

fn resolve_form_for_submit(dom: &Dom, node: NodeId) -> Option<NodeId> {
    let mut cursor = dom.parent(node);
    while let Some(current) = cursor {
        if dom.tag_name(current) == Some("form") {
            return Some(current);
        }
        cursor = dom.parent(current);
    }
    None
}

fn in_page_anchor_target(dom: &Dom, node: NodeId) -> Option<String> {
    if dom.tag_name(node) != Some("a") {
        return None;
    }
    let href = dom.attr(node, "href")?;
    let target_id = href.strip_prefix('#')?;
    if target_id.is_empty() {
        return None;
    }
    Some(target_id.to_string())
}

fn node_desc(dom: &Dom, node: NodeId) -> String {
    let Some(element) = dom.element(node) else {
        return "#document".to_string();
    };
    let mut desc = element.tag_name.clone();
    if let Some(id) = element.attrs.get("id") {
        desc.push('#');
        desc.push_str(id);
    } else if let Some(first) = element
        .attrs
        .get("class")
        .and_then(|class| class.split_whitespace().next())
    {
        desc.push('.');
        desc.push_str(first);
    }
    desc
}

fn dom_snippet(dom: &Dom, node: NodeId) -> String {
    let mut out = String::new();
    render_node(dom, node, &mut out);
    if out.len() > 120 {
        let mut cut = 120;
        while !out.is_char_boundary(cut) {
            cut -= 1;
        }
        out.truncate(cut);
        out.push_str("...");
    }
    out
}

fn render_node(dom: &Dom, node: NodeId, out: &mut String) {
    match &dom.nodes[node.0].node_type {
        NodeType::Text(text) => out.push_str(text),
        NodeType::Document => {
            for child in &dom.nodes[node.0].children {
                render_node(dom, *child, out);
            }
        }
        NodeType::Element(element) => {
            out.push('<');
            out.push_str(&element.tag_name);
            let mut attrs: Vec<_> = element.attrs.iter().collect();
            attrs.sort_by_key(|(name, _)| name.as_str());
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
            out.push('>');
            for child in &dom.nodes[node.0].children {
                render_node(dom, *child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag_name);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests;

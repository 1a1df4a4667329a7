use super::{EventState, NodeId, Page, Result, Target};
use crate::validate::{validate_email, validate_message, FieldVerdict};

// Each handler carries the node context it captured at wiring time, so
// firing never re-queries globals.
#[derive(Debug, Clone)]
pub(crate) enum Handler {
    MenuLinkClick {
        target_id: String,
    },
    SectionSpy {
        sections: Vec<NodeId>,
        links: Vec<NodeId>,
    },
    MenuToggle {
        toggle: NodeId,
        menu: NodeId,
    },
    FieldBlur {
        field: NodeId,
        rule: FieldRule,
    },
    ContactSubmit {
        email: Option<NodeId>,
        message: Option<NodeId>,
        form: NodeId,
    },
    ScrollTopVisibility {
        button: NodeId,
    },
    ScrollTopClick,
    CardLift {
        card: NodeId,
    },
    CardRest {
        card: NodeId,
    },
    Parallax {
        banner: NodeId,
    },
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum FieldRule {
    Email,
    Message,
}

// A timer continuation with its state captured up front.
#[derive(Debug, Clone)]
pub(crate) enum DeferredTask {
    FinishSubmission {
        form: NodeId,
        button: NodeId,
        original_label: String,
    },
    ExpireNotice {
        notice: NodeId,
    },
    TypeNextChar {
        target: NodeId,
        text: String,
        index: usize,
    },
}

impl DeferredTask {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::FinishSubmission { .. } => "finish_submission",
            Self::ExpireNotice { .. } => "expire_notice",
            Self::TypeNextChar { .. } => "type_next_char",
        }
    }
}

impl Page {
    pub(crate) fn init_navigation(&mut self) -> Result<()> {
        let links = self.dom.query_selector_all(r##".menu a[href^="#"]"##)?;
        for link in &links {
            let Some(href) = self.dom.attr(*link, "href") else {
                continue;
            };
            let target_id = href.trim_start_matches('#').to_string();
            self.listeners
                .add(Target::Node(*link), "click", Handler::MenuLinkClick { target_id });
        }

        let sections = self.dom.query_selector_all("section[id]")?;
        self.listeners
            .add(Target::Window, "scroll", Handler::SectionSpy { sections, links });
        Ok(())
    }

    pub(crate) fn init_scroll_reveal(&mut self) -> Result<()> {
        let sections = self.dom.query_selector_all("section")?;
        for section in sections {
            self.dom.class_add(section, "fade-out")?;
            if !self.dom.class_contains(section, "fade-in")? {
                self.reveal.observe(section);
            }
        }

        let cards = self.dom.query_selector_all(".project-card")?;
        for (index, card) in cards.into_iter().enumerate() {
            self.dom.class_add(card, "fade-out")?;
            let delay = seconds_style(self.config.card_stagger_step_ms * index as i64);
            self.dom.style_set(card, "transition-delay", &delay)?;
            if !self.dom.class_contains(card, "fade-in")? {
                self.reveal.observe(card);
            }
        }
        Ok(())
    }

    pub(crate) fn init_contact_form(&mut self) -> Result<()> {
        let Some(form) = self.dom.query_selector("form")? else {
            return Ok(());
        };
        let email = self.dom.query_selector("#email")?;
        let message = self.dom.query_selector("#message")?;

        if let Some(field) = email {
            self.listeners.add(
                Target::Node(field),
                "blur",
                Handler::FieldBlur {
                    field,
                    rule: FieldRule::Email,
                },
            );
        }
        if let Some(field) = message {
            self.listeners.add(
                Target::Node(field),
                "blur",
                Handler::FieldBlur {
                    field,
                    rule: FieldRule::Message,
                },
            );
        }

        self.listeners.add(
            Target::Node(form),
            "submit",
            Handler::ContactSubmit {
                email,
                message,
                form,
            },
        );
        Ok(())
    }

    pub(crate) fn init_scroll_top(&mut self) -> Result<()> {
        if self.dom.query_selector(".scroll-to-top")?.is_none() {
            let button = self.dom.create_detached_element("button");
            self.dom.set_attr(button, "class", "scroll-to-top")?;
            self.dom.set_attr(button, "aria-label", "Scroll to top")?;
            self.dom.create_text(button, "↑".to_string());
            let body = self.dom.body_or_root();
            self.dom.append_child(body, button)?;
        }
        let Some(button) = self.dom.query_selector(".scroll-to-top")? else {
            return Ok(());
        };
        self.listeners
            .add(Target::Window, "scroll", Handler::ScrollTopVisibility { button });
        self.listeners
            .add(Target::Node(button), "click", Handler::ScrollTopClick);
        Ok(())
    }

    pub(crate) fn init_mobile_menu(&mut self) -> Result<()> {
        let Some(nav) = self.dom.query_selector(".navigation")? else {
            return Ok(());
        };
        let Some(menu) = self.dom.query_selector(".menu")? else {
            return Ok(());
        };

        if self.dom.query_selector(".menu-toggle")?.is_none() {
            let toggle = self.dom.create_detached_element("button");
            self.dom.set_attr(toggle, "class", "menu-toggle")?;
            self.dom.set_attr(toggle, "aria-label", "Toggle menu")?;
            self.dom.set_attr(toggle, "aria-expanded", "false")?;
            for _ in 0..3 {
                let bar = self.dom.create_detached_element("span");
                self.dom.append_child(toggle, bar)?;
            }
            self.dom.insert_before(nav, toggle, menu)?;
        }

        let Some(toggle) = self.dom.query_selector(".menu-toggle")? else {
            return Ok(());
        };
        self.listeners
            .add(Target::Node(toggle), "click", Handler::MenuToggle { toggle, menu });
        Ok(())
    }

    pub(crate) fn init_card_hover(&mut self) -> Result<()> {
        let cards = self.dom.query_selector_all(".project-card")?;
        for card in cards {
            self.listeners
                .add(Target::Node(card), "mouseenter", Handler::CardLift { card });
            self.listeners
                .add(Target::Node(card), "mouseleave", Handler::CardRest { card });
        }
        Ok(())
    }

    pub(crate) fn init_parallax(&mut self) -> Result<()> {
        if let Some(banner) = self.dom.query_selector(".banner")? {
            self.listeners
                .add(Target::Window, "scroll", Handler::Parallax { banner });
        }
        Ok(())
    }

    // Reveals text one character per tick. Not wired to anything at
    // initialization; kept as a reusable utility.
    pub fn start_typewriter(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self
            .dom
            .query_selector(selector)?
            .ok_or_else(|| super::Error::SelectorNotFound(selector.to_string()))?;
        self.dom.set_text(target, "")?;
        typewriter_step(self, target, text.to_string(), 0)
    }
}

pub(crate) fn run_handler(page: &mut Page, handler: Handler, event: &mut EventState) -> Result<()> {
    match handler {
        Handler::MenuLinkClick { target_id } => {
            event.prevent_default();
            let Some(section) = page.dom.by_id(&target_id) else {
                return Ok(());
            };
            if let Some(menu) = page.dom.query_selector(".menu")? {
                if page.dom.class_contains(menu, "active")? {
                    page.dom.class_remove(menu, "active")?;
                }
            }
            let top = page.dom.offset_top(section)?;
            page.scroll_to(top)?;
        }
        Handler::SectionSpy { sections, links } => {
            // Last section whose top, minus the look-ahead margin, has been
            // scrolled past wins.
            let mut current = String::new();
            for section in sections {
                let top = page.dom.offset_top(section)?;
                if page.viewport.scroll_y >= top - page.config.section_lookahead {
                    current = page.dom.attr(section, "id").unwrap_or_default();
                }
            }
            for link in links {
                page.dom.class_remove(link, "active")?;
                if current.is_empty() {
                    continue;
                }
                let href = page.dom.attr(link, "href").unwrap_or_default();
                if href == format!("#{current}") {
                    page.dom.class_add(link, "active")?;
                }
            }
        }
        Handler::MenuToggle { toggle, menu } => {
            let expanded = page.dom.class_toggle(menu, "active")?;
            page.dom.class_toggle(toggle, "active")?;
            page.dom
                .set_attr(toggle, "aria-expanded", if expanded { "true" } else { "false" })?;
        }
        Handler::FieldBlur { field, rule } => {
            validate_and_render(page, Some(field), rule)?;
        }
        Handler::ContactSubmit {
            email,
            message,
            form,
        } => {
            event.prevent_default();
            let email_ok = validate_and_render(page, email, FieldRule::Email)?;
            let message_ok = validate_and_render(page, message, FieldRule::Message)?;
            if email_ok && message_ok {
                begin_submission(page, form)?;
            }
        }
        Handler::ScrollTopVisibility { button } => {
            if page.viewport.scroll_y > page.config.scroll_top_threshold {
                page.dom.class_add(button, "visible")?;
            } else {
                page.dom.class_remove(button, "visible")?;
            }
        }
        Handler::ScrollTopClick => {
            page.scroll_to(0)?;
        }
        Handler::CardLift { card } => {
            page.dom
                .style_set(card, "transform", "translateY(-10px) scale(1.02)")?;
        }
        Handler::CardRest { card } => {
            page.dom
                .style_set(card, "transform", "translateY(0) scale(1)")?;
        }
        Handler::Parallax { banner } => {
            let offset = page.viewport.scroll_y * page.config.parallax_factor_permille / 1000;
            page.dom
                .style_set(banner, "transform", &format!("translateY({offset}px)"))?;
        }
    }
    Ok(())
}

pub(crate) fn run_deferred(page: &mut Page, task: DeferredTask) -> Result<()> {
    match task {
        DeferredTask::FinishSubmission {
            form,
            button,
            original_label,
        } => {
            let notice = page.dom.create_detached_element("div");
            page.dom.set_attr(notice, "class", "success-message")?;
            page.dom
                .create_text(notice, "✓ Message sent successfully!".to_string());
            if let Some(parent) = page.dom.parent(form) {
                page.dom.insert_before(parent, notice, form)?;
            }

            page.dom.reset_form_controls(form)?;
            page.dom.set_text(button, &original_label)?;
            page.dom.set_disabled(button, false)?;

            for node in page.dom.query_selector_all_from(form, ".success, .error")? {
                page.dom.class_remove(node, "success")?;
                page.dom.class_remove(node, "error")?;
            }

            let lifetime = page.config.notice_lifetime_ms;
            page.schedule_task(lifetime, DeferredTask::ExpireNotice { notice });
        }
        DeferredTask::ExpireNotice { notice } => {
            page.dom.remove_node(notice)?;
        }
        DeferredTask::TypeNextChar {
            target,
            text,
            index,
        } => {
            typewriter_step(page, target, text, index)?;
        }
    }
    Ok(())
}

fn validate_and_render(page: &mut Page, field: Option<NodeId>, rule: FieldRule) -> Result<bool> {
    let Some(field) = field else {
        return Ok(true);
    };
    let value = page.dom.value(field);
    let verdict = match rule {
        FieldRule::Email => validate_email(&value),
        FieldRule::Message => validate_message(&value),
    };
    let ok = verdict.is_ok();
    render_field_feedback(page, field, verdict)?;
    Ok(ok)
}

// Success/error state lives on the field; the message node lives in the
// field's container. The stale message is removed first, so a container
// never holds two.
fn render_field_feedback(page: &mut Page, field: NodeId, verdict: FieldVerdict) -> Result<()> {
    let Some(container) = page.dom.parent(field) else {
        return Ok(());
    };

    if let Some(stale) = page.dom.query_selector_from(container, ".error-message")? {
        page.dom.remove_node(stale)?;
    }

    page.dom.class_remove(field, "error")?;
    page.dom.class_remove(field, "success")?;

    match verdict {
        Err(kind) => {
            page.dom.class_add(field, "error")?;
            let notice = page.dom.create_detached_element("div");
            page.dom.set_attr(notice, "class", "error-message")?;
            page.dom.create_text(notice, kind.message().to_string());
            page.dom.append_child(container, notice)?;
        }
        Ok(()) => {
            page.dom.class_add(field, "success")?;
        }
    }
    Ok(())
}

fn begin_submission(page: &mut Page, form: NodeId) -> Result<()> {
    let Some(button) = page.dom.query_selector_from(form, "button[type=submit]")? else {
        return Ok(());
    };
    // A disabled control means a submission is already in flight; its label
    // is the pending indicator, not something to capture and restore.
    if page.dom.disabled(button) {
        return Ok(());
    }
    let original_label = page.dom.text_content(button);
    page.dom.set_text(button, "Sending...")?;
    page.dom.set_disabled(button, true)?;

    let delay = page.config.submit_delay_ms;
    page.schedule_task(
        delay,
        DeferredTask::FinishSubmission {
            form,
            button,
            original_label,
        },
    );
    Ok(())
}

fn typewriter_step(page: &mut Page, target: NodeId, text: String, index: usize) -> Result<()> {
    let Some(ch) = text.chars().nth(index) else {
        return Ok(());
    };
    let mut current = page.dom.text_content(target);
    current.push(ch);
    page.dom.set_text(target, &current)?;

    let speed = page.config.typewriter_speed_ms;
    page.schedule_task(
        speed,
        DeferredTask::TypeNextChar {
            target,
            text,
            index: index + 1,
        },
    );
    Ok(())
}

fn seconds_style(ms: i64) -> String {
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{}s", ms as f64 / 1000.0)
    }
}

//! Keyword dispatch from user text to a canned reply.
//!
//! The rule table is evaluated top to bottom against the normalized text and
//! the first match wins. Matching is substring containment, so a specific
//! keyword must sit above any broader rule that could also match it.

use crate::base::{
    replies,
    types::{QuickReply, Reply},
};

/// How a rule's keywords are tested against the normalized text.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// The whole normalized text equals one of the keywords.
    Exact(&'static [&'static str]),
    /// The normalized text contains one of the keywords.
    Contains(&'static [&'static str]),
}

impl Predicate {
    /// The keywords of this predicate, stored already normalized.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Predicate::Exact(keywords) | Predicate::Contains(keywords) => keywords,
        }
    }

    /// Test an already-normalized key.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Predicate::Exact(keywords) => keywords.iter().any(|k| key == *k),
            Predicate::Contains(keywords) => keywords.iter().any(|k| key.contains(k)),
        }
    }
}

/// One entry of the keyword table.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub reply: fn() -> Reply,
}

/// The keyword table, in priority order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "menu",
        predicate: Predicate::Exact(&["เมนู", "menu"]),
        reply: menu_reply,
    },
    Rule {
        name: "tokyo",
        predicate: Predicate::Contains(&["โตเกียว5วัน", "tokyo5"]),
        reply: || Reply::text(replies::TOKYO_5_DAYS),
    },
    Rule {
        name: "kansai",
        predicate: Predicate::Contains(&["โอซาก้า-เกียวโต", "คันไซ", "kansai"]),
        reply: || Reply::text(replies::KANSAI),
    },
    Rule {
        name: "hokkaido",
        predicate: Predicate::Contains(&["ฮอกไกโด", "hokkaido", "ซัปโปโร"]),
        reply: || Reply::text(replies::HOKKAIDO),
    },
    Rule {
        name: "kyushu",
        predicate: Predicate::Contains(&["คิวชู", "kyushu", "ฟุกุโอกะ"]),
        reply: || Reply::text(replies::KYUSHU),
    },
    Rule {
        name: "sakura",
        predicate: Predicate::Contains(&["ซากุระ", "sakura"]),
        reply: || Reply::text(replies::SAKURA),
    },
    Rule {
        name: "momiji",
        predicate: Predicate::Contains(&["ใบไม้เปลี่ยนสี", "momiji", "autumn"]),
        reply: || Reply::text(replies::MOMIJI),
    },
    Rule {
        name: "jrpass",
        predicate: Predicate::Contains(&["jrpass"]),
        reply: || Reply::text(replies::JR_PASS),
    },
    Rule {
        name: "suica",
        predicate: Predicate::Contains(&["suica", "pasmo", "icoca"]),
        reply: || Reply::text(replies::SUICA),
    },
    Rule {
        name: "wifi",
        predicate: Predicate::Contains(&["wifi", "ซิม"]),
        reply: || Reply::text(replies::WIFI),
    },
    Rule {
        name: "help",
        predicate: Predicate::Contains(&["ช่วย", "help"]),
        reply: help_reply,
    },
];

fn menu_quick_replies() -> Vec<QuickReply> {
    replies::QUICK_REPLY_KEYWORDS.iter().map(|k| QuickReply::keyword(k)).collect()
}

fn menu_reply() -> Reply {
    Reply::text(replies::MENU).with_quick_replies(menu_quick_replies())
}

fn help_reply() -> Reply {
    Reply::text(replies::HELP).with_quick_replies(menu_quick_replies())
}

/// Fold a dash variant to ASCII `-`.
fn fold_dash(c: char) -> char {
    match c {
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
        c => c,
    }
}

/// Normalize user text for matching.
///
/// Trims, lowercases, drops every whitespace character and folds dashes.
/// Normalizing twice yields the same string.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().chars().filter(|c| !c.is_whitespace()).map(fold_dash).collect()
}

/// Find the first rule matching the text, if any.
pub fn classify(text: &str) -> Option<&'static Rule> {
    let key = normalize(text);

    RULES.iter().find(|rule| rule.predicate.matches(&key))
}

/// The reply for text that matched no rule: the text echoed back, then help.
pub fn fallback(text: &str) -> Reply {
    Reply::text(replies::fallback(text)).with_quick_replies(menu_quick_replies())
}

/// Produce the reply for one inbound text message.
pub fn dispatch(text: &str) -> Reply {
    match classify(text) {
        Some(rule) => (rule.reply)(),
        None => fallback(text),
    }
}

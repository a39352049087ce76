// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Signal tables consulted by the prompt analyzer.
//!
//! Patterns made only of letters and digits are word stems: they match any
//! word of the prompt that starts with them (`analy` matches "analyze" and
//! "analysis"). Every other pattern is matched as a plain substring of the
//! lowercased prompt, which is how phrases and punctuation (`step by step`,
//! `c++`, fenced code) are expressed.

use switchyard_core::Capability;

/// Capability signal categories. A prompt requires every capability with at
/// least one matching pattern.
pub const CAPABILITY_SIGNALS: &[(Capability, &[&str])] = &[
    (
        Capability::CodeGeneration,
        &[
            "function", "code", "coding", "program", "script", "compile", "debug",
            "refactor", "implement", "algorithm", "regex", "sql", "python",
            "javascript", "typescript", "rust", "java", "golang", "c++", "```", "api",
            "bug",
        ],
    ),
    (
        Capability::Analysis,
        &[
            "analy", "compare", "comparison", "evaluat", "assess", "examin",
            "investigat", "diagnos", "critique", "review", "explain", "interpret",
            "break down", "pros and cons", "trade-off", "tradeoff",
        ],
    ),
    (
        Capability::CreativeWriting,
        &[
            "story", "stories", "poem", "poetry", "novel", "fiction", "narrative",
            "lyric", "creative", "imagine", "character", "plot", "screenplay", "haiku",
            "fairy tale", "in the style of", "once upon",
        ],
    ),
    (
        Capability::TechnicalWriting,
        &[
            "documentation", "document", "readme", "technical", "tutorial", "manual",
            "specification", "whitepaper", "user guide", "changelog",
        ],
    ),
    (
        Capability::Translation,
        &[
            "translat", "localiz", "into spanish", "into french", "into german",
            "into english", "into chinese", "into japanese",
        ],
    ),
    (
        Capability::Summarization,
        &[
            "summar", "tl;dr", "tldr", "condense", "recap", "key points", "gist",
            "shorten",
        ],
    ),
    (
        Capability::QuestionAnswering,
        &[
            "what is", "what are", "what's", "who is", "who was", "when did",
            "when was", "where is", "how many", "how much", "how do", "how does",
            "define ", "meaning of",
        ],
    ),
    (
        Capability::Reasoning,
        &[
            "prove", "proof", "therefore", "hence", "thus", "deduce", "derive",
            "derivation", "logic", "reason", "step by step", "step-by-step",
            "if and only if", "implies", "correctness", "theorem", "lemma",
            "induction", "puzzle", "riddle",
        ],
    ),
];

/// Complexity keyword weights. Each pattern contributes at most once.
/// Negative weights only apply when no positive keyword matched.
pub const COMPLEXITY_WEIGHTS: &[(&str, f64)] = &[
    ("prove", 1.5),
    ("proof", 1.5),
    ("theorem", 1.5),
    ("byzantine", 1.5),
    ("algorithm", 1.0),
    ("optimiz", 1.0),
    ("architect", 1.0),
    ("distributed", 1.0),
    ("consensus", 1.0),
    ("fault toleran", 1.0),
    ("concurren", 1.0),
    ("correctness", 1.0),
    ("formal", 1.0),
    ("cryptograph", 1.0),
    ("compiler", 1.0),
    ("machine learning", 1.0),
    ("neural", 1.0),
    ("quantum", 1.0),
    ("parallel", 0.5),
    ("scalab", 0.5),
    ("design", 0.5),
    ("complex", 0.5),
    ("comprehensive", 0.5),
    ("in-depth", 0.5),
    ("in depth", 0.5),
    ("detailed", 0.5),
    ("trade-off", 0.5),
    ("tradeoff", 0.5),
    ("step by step", 0.5),
    ("business plan", 0.5),
    ("strategy", 0.5),
    ("research", 0.5),
    ("refactor", 0.5),
    ("debug", 0.5),
    ("summar", -0.5),
    ("list", -0.5),
    ("simple", -0.5),
    ("brief", -0.5),
    ("short", -0.5),
    ("translat", -0.5),
    ("define", -0.5),
    ("hello", -0.5),
    ("basic", -0.5),
];

/// Substrings that mark an additional instruction within the same prompt.
pub const MULTI_PART_MARKERS: &[&str] = &[
    " and ",
    " then ",
    " also ",
    "additionally",
    "furthermore",
    "moreover",
    "; ",
    "as well as",
];

/// Weight of one multi-part marker occurrence.
pub const MULTI_PART_WEIGHT: f64 = 0.5;

/// Ceiling on the multi-part contribution.
pub const MULTI_PART_CAP: f64 = 1.5;

/// Weight of a prompt that fills the length normalization window.
pub const LENGTH_WEIGHT: f64 = 1.5;

/// Urgency markers, matched as whole words. Take precedence over cost
/// markers.
pub const SPEED_MARKERS: &[&str] = &[
    "quick",
    "quickly",
    "quicker",
    "asap",
    "fast",
    "faster",
    "fastest",
    "urgent",
    "urgently",
    "immediately",
    "right away",
    "hurry",
];

/// Budget markers, matched as whole words.
pub const COST_MARKERS: &[&str] = &[
    "budget",
    "budgets",
    "cost",
    "costs",
    "cheap",
    "cheaper",
    "cheapest",
    "inexpensive",
    "afford",
    "affordable",
    "low-cost",
    "save money",
    "economical",
    "frugal",
];

/// A prompt prepared for pattern matching.
pub struct PromptText {
    lower: String,
    words: Vec<String>,
}

impl PromptText {
    pub fn new(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        let words = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { lower, words }
    }

    /// Lowercased prompt.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Whether `pattern` matches, as a word stem or a substring.
    pub fn matches(&self, pattern: &str) -> bool {
        if pattern.chars().all(char::is_alphanumeric) {
            self.words.iter().any(|w| w.starts_with(pattern))
        } else {
            self.lower.contains(pattern)
        }
    }

    /// Whether any of `patterns` matches.
    pub fn matches_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.matches(p))
    }

    /// Whether `pattern` occurs as whole words. Multi-word patterns match
    /// consecutive words, whatever separates them.
    pub fn matches_words(&self, pattern: &str) -> bool {
        let needle: Vec<&str> = pattern
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        !needle.is_empty()
            && self
                .words
                .windows(needle.len())
                .any(|window| window.iter().zip(&needle).all(|(w, n)| w.as_str() == *n))
    }

    /// Whether any of `patterns` occurs as whole words.
    pub fn matches_any_words(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.matches_words(p))
    }

    /// Number of enumerated lines (`1.`, `2)`, `- `, `* `).
    pub fn enumerated_lines(&self) -> usize {
        self.lower
            .lines()
            .map(str::trim_start)
            .filter(|line| {
                if line.starts_with("- ") || line.starts_with("* ") {
                    return true;
                }
                let digits = line.chars().take_while(char::is_ascii_digit).count();
                digits > 0 && matches!(line[digits..].chars().next(), Some('.' | ')'))
            })
            .count()
    }
}

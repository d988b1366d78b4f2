use obligation_guide_engine::markup::{
    ContentNode, FormulaSegment, ParseCache, ReferenceList, cell_lines, parse_inline,
};
use obligation_guide_engine::obligations::{
    ContentBlock, ContractualCondition, Obligation, Section, Severity, Warning,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CELL_SEPARATOR: &str = " │ ";

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Red => Style::default().fg(Color::Red),
        Severity::Yellow => Style::default().fg(Color::Yellow),
        Severity::Positive => Style::default().fg(Color::Green),
    }
}

/// Accumulates styled spans into terminal lines.
///
/// Popup contents are numbered in the text and listed below the block
/// they appear in.
struct LineWriter<'r> {
    references: &'r ReferenceList,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    notes: Vec<String>,
    note_count: usize,
}

impl<'r> LineWriter<'r> {
    fn new(references: &'r ReferenceList) -> Self {
        Self {
            references,
            lines: vec![],
            current: vec![],
            notes: vec![],
            note_count: 0,
        }
    }

    fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if !text.is_empty() {
            self.current.push(Span::styled(text, style));
        }
    }

    /// Pushes text that may contain line breaks.
    fn text(&mut self, text: &str, style: Style) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.push(first, style);
        }
        for part in parts {
            self.break_line();
            self.push(part, style);
        }
    }

    fn break_line(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    fn end_line(&mut self) {
        if !self.current.is_empty() {
            self.break_line();
        }
    }

    fn blank(&mut self) {
        self.end_line();
        self.flush_notes();
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        self.end_line();
        self.push(text, bold());
        self.break_line();
    }

    fn flush_notes(&mut self) {
        for note in std::mem::take(&mut self.notes) {
            self.lines.push(Line::from(Span::styled(note, dim())));
        }
    }

    fn nodes(&mut self, nodes: &[ContentNode], style: Style) {
        for node in nodes {
            self.node(node, style);
        }
    }

    fn node(&mut self, node: &ContentNode, style: Style) {
        match node {
            ContentNode::Text(text) => self.text(text, style),
            ContentNode::Bold(children) => self.nodes(children, style.add_modifier(Modifier::BOLD)),
            ContentNode::Italic(children) => {
                self.nodes(children, style.add_modifier(Modifier::ITALIC))
            }
            ContentNode::Grey(children) => self.nodes(children, style.fg(Color::DarkGray)),
            ContentNode::Link { label, url } => {
                self.push(
                    label.as_str(),
                    style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                );
                self.push(format!(" <{url}>"), dim());
            }
            ContentNode::Popup {
                label,
                title,
                body,
                reference,
            } => {
                self.note_count += 1;
                self.push(label.as_str(), style.fg(Color::Cyan));
                self.push(format!("[{}]", self.note_count), dim());
                let mut note = format!("  [{}] {title}: {body}", self.note_count);
                if let Some(reference) = reference.as_deref().filter(|r| !r.is_empty()) {
                    note.push_str(&format!(" ({reference})"));
                }
                self.notes.push(note);
            }
            ContentNode::LegalToggle(label) => {
                self.push(format!("§ {label}"), style.fg(Color::Magenta));
            }
            ContentNode::Image { alt, url } => {
                self.end_line();
                self.push(format!("[afbeelding: {alt}]"), style.fg(Color::Cyan));
                self.push(format!(" <{url}>"), dim());
                self.break_line();
            }
            ContentNode::Table { header, rows } => {
                self.end_line();
                self.table_row(header, style.add_modifier(Modifier::BOLD));
                for row in rows {
                    self.table_row(row, style);
                }
            }
            ContentNode::Formula(segments) => {
                self.end_line();
                self.push("  ", style);
                for segment in segments {
                    match segment {
                        FormulaSegment::Text { text } => self.push(text.as_str(), style),
                        FormulaSegment::Subscript { base, sub } => {
                            self.push(base.as_str(), style);
                            self.push(sub.as_str(), style.add_modifier(Modifier::DIM));
                        }
                    }
                }
                self.break_line();
            }
        }
    }

    /// One table row; cells with `<br>` markers span several lines.
    fn table_row(&mut self, cells: &[String], style: Style) {
        let split: Vec<Vec<&str>> = cells.iter().map(|c| cell_lines(c)).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            for (col, cell) in split.iter().enumerate() {
                if col > 0 {
                    self.push(CELL_SEPARATOR, dim());
                }
                let text = cell.get(i).copied().unwrap_or_default();
                let nodes = parse_inline(text, self.references);
                self.nodes(&nodes, style);
            }
            self.break_line();
        }
    }

    fn markup(&mut self, nodes: &[ContentNode]) {
        self.nodes(nodes, Style::default());
        self.end_line();
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.end_line();
        self.flush_notes();
        self.lines
    }
}

/// Renders a whole module: header, summary, sections and legal references.
pub fn module_lines(module: &Obligation, cache: &mut ParseCache) -> Vec<Line<'static>> {
    let references = module.reference_list();
    cache.set_references(references.clone());
    let mut w = LineWriter::new(&references);

    w.heading(&module.title);
    if !module.badges.is_empty() {
        let badges: Vec<String> = module.badges.iter().map(|b| format!("[{b}]")).collect();
        w.push(badges.join(" "), Style::default().fg(Color::Yellow));
        w.break_line();
    }
    w.blank();
    w.markup(cache.parse(&module.summary));
    w.blank();

    if let Some(warnings) = &module.warnings {
        warning_lines(&mut w, warnings, cache);
        w.blank();
    }

    for section in &module.sections {
        section_lines(&mut w, section, cache);
    }

    if let Some(warnings) = &module.footer_warnings {
        warning_lines(&mut w, warnings, cache);
        w.blank();
    }

    if !module.legal_references.is_empty() {
        w.heading("Juridische grondslag");
        for r in &module.legal_references {
            w.push(format!("{}: ", r.label), bold());
            w.push(r.citation.as_str(), Style::default());
            if !r.url.is_empty() {
                w.push(format!(" <{}>", r.url), dim());
            }
            w.break_line();
        }
    }

    w.finish()
}

fn section_lines(w: &mut LineWriter<'_>, section: &Section, cache: &mut ParseCache) {
    w.end_line();
    w.push(format!("▸ {}", section.title), bold().fg(Color::White));
    w.push(format!("  ({})", section.requirement_level.label()), dim());
    w.break_line();

    for block in section.blocks() {
        block_lines(w, block, cache);
        w.blank();
    }

    if let Some(note) = &section.footer_note {
        w.markup(cache.parse(note));
        w.blank();
    }
}

fn block_lines(w: &mut LineWriter<'_>, block: ContentBlock<'_>, cache: &mut ParseCache) {
    match block {
        ContentBlock::Intro(text) => w.markup(cache.parse(text)),
        ContentBlock::Warnings(warnings) => warning_lines(w, warnings, cache),
        ContentBlock::Steps {
            title,
            steps,
            ordered,
        } => {
            w.heading(title);
            for (i, step) in steps.iter().enumerate() {
                let marker = if ordered {
                    format!("{}. ", i + 1)
                } else {
                    "• ".to_string()
                };
                w.push(marker, Style::default());
                w.markup(cache.parse(step));
            }
        }
        ContentBlock::ExampleTexts(examples) => {
            for example in examples {
                w.heading(&example.label);
                w.markup(cache.parse(&example.text));
            }
        }
        ContentBlock::TabbedExamples(tabs) => {
            for (label, examples) in tabs.tabs() {
                w.heading(label);
                for example in examples {
                    let title_style = Style::default().add_modifier(Modifier::ITALIC);
                    w.push(format!("{}: ", example.title), title_style);
                    w.markup(cache.parse(&example.text));
                }
            }
        }
        ContentBlock::Specs(specs) => {
            w.heading("Technische specificaties");
            for spec in specs {
                w.push(format!("{} ", spec.code), bold());
                if let Some(level) = spec.requirement_level {
                    w.push(format!("[{}] ", level.label()), dim());
                }
                w.nodes(cache.parse(&spec.text), Style::default());
                w.push(format!("  ({})", spec.legal_basis), dim());
                w.end_line();
            }
        }
        ContentBlock::GunningscriteriaTabs(tabs) => {
            for (label, items) in tabs.tabs() {
                w.heading(label);
                for item in items {
                    w.push(format!("{} {}", item.code, item.title), bold());
                    w.break_line();
                    w.markup(cache.parse(&item.description));
                    for point in &item.points {
                        w.push("  • ", Style::default());
                        w.markup(cache.parse(point));
                    }
                    w.push(format!("({})", item.legal_basis), dim());
                    w.break_line();
                }
            }
        }
        ContentBlock::ContractualConditions(conditions) => {
            w.heading("Contractuele voorwaarden");
            condition_lines(w, conditions, cache);
        }
        ContentBlock::ContractualConditionsTabs(tabs) => {
            for (label, conditions) in tabs.tabs() {
                w.heading(label);
                condition_lines(w, conditions, cache);
            }
        }
        ContentBlock::ProductLinks(links) => {
            for link in links {
                w.push(format!("→ {}", link.label), Style::default().fg(Color::Blue));
                w.push(format!(" <{}>", link.url), dim());
                w.break_line();
            }
        }
        ContentBlock::AdditionalSteps(steps) => {
            for step in steps {
                w.push("• ", Style::default());
                w.markup(cache.parse(step));
            }
        }
    }
}

fn warning_lines(w: &mut LineWriter<'_>, warnings: &[Warning], cache: &mut ParseCache) {
    for warning in warnings {
        w.push("⚠ ", severity_style(warning.severity));
        w.markup(cache.parse(&warning.text));
    }
}

fn condition_lines(
    w: &mut LineWriter<'_>,
    conditions: &[ContractualCondition],
    cache: &mut ParseCache,
) {
    for condition in conditions {
        w.push(format!("{} ", condition.code), bold());
        w.nodes(cache.parse(&condition.text), Style::default());
        w.push(format!("  ({})", condition.legal_basis), dim());
        w.end_line();
    }
}

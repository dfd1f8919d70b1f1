use crate::host::{PickItem, Picker};
use sidenote_core::utils::now_millis;
use sidenote_core::{summarize, ListScope, Note, NoteType};

/// Sort applied to the Root screen's candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    Author,
    NewestFirst,
    OldestFirst,
}

/// Screens of the selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Root,
    Filter,
    Order,
}

/// Menu flow over a note list: a Root screen listing the candidates
/// behind two meta-entries, with Filter and Order sub-screens that apply
/// their selection and return to Root. Picking a note terminates the
/// flow; cancelling any screen terminates it with no result.
pub struct SelectionFlow {
    scope: ListScope,
    filter: Option<NoteType>,
    order: SortOrder,
}

impl SelectionFlow {
    pub fn new(scope: ListScope) -> Self {
        Self {
            scope,
            filter: None,
            order: SortOrder::None,
        }
    }

    pub fn run(mut self, picker: &mut impl Picker, notes: &[Note]) -> Option<Note> {
        let mut screen = Screen::Root;
        loop {
            screen = match screen {
                Screen::Root => {
                    let candidates = self.candidates(notes);
                    let mut items = vec![
                        PickItem::new("$(filter-filled)", "Filter Notes"),
                        PickItem::new("$(list-ordered)", "Order Notes"),
                    ];
                    let now = now_millis();
                    items.extend(candidates.iter().map(|note| {
                        let summary = summarize(note, self.scope, now);
                        PickItem::new(format!("$({})", summary.icon), summary.text)
                    }));

                    match picker.pick(&items, "Select Note")? {
                        0 => Screen::Filter,
                        1 => Screen::Order,
                        picked => {
                            return candidates.get(picked - 2).map(|note| (*note).clone())
                        }
                    }
                }
                Screen::Filter => {
                    let mut items = vec![PickItem::new("$(clear-all)", "Clear Filter")];
                    items.extend(NoteType::ALL.iter().map(|kind| {
                        PickItem::new(
                            format!("$({})", kind.icon()),
                            format!("Filter {}", kind.label()),
                        )
                    }));

                    self.filter = match picker.pick(&items, "Select Filter")? {
                        0 => None,
                        picked => Some(NoteType::ALL[picked - 1]),
                    };
                    Screen::Root
                }
                Screen::Order => {
                    let items = [
                        PickItem::new("$(clear-all)", "By None"),
                        PickItem::new("$(account)", "By Author"),
                        PickItem::new("$(fold-up)", "By Latest"),
                        PickItem::new("$(fold-down)", "By Oldest"),
                    ];

                    self.order = match picker.pick(&items, "Select Order")? {
                        1 => SortOrder::Author,
                        2 => SortOrder::NewestFirst,
                        3 => SortOrder::OldestFirst,
                        _ => SortOrder::None,
                    };
                    Screen::Root
                }
            };
        }
    }

    /// Current filter and order applied to the full list. Sorts are
    /// stable, so ties keep insertion order.
    fn candidates<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        let mut out: Vec<&Note> = notes
            .iter()
            .filter(|note| self.filter.map_or(true, |kind| note.kind == kind))
            .collect();

        match self.order {
            SortOrder::None => {}
            SortOrder::Author => out.sort_by(|a, b| match (&a.author, &b.author) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }),
            SortOrder::NewestFirst => out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
            SortOrder::OldestFirst => out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        }
        out
    }
}

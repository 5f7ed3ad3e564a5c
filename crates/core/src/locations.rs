use crate::model::Suburb;

/// Options of the location selector and which one is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationOptions {
    suburbs: Vec<Suburb>,
    selected: Option<usize>,
}

impl LocationOptions {
    pub const fn new(suburbs: Vec<Suburb>) -> Self {
        Self {
            suburbs,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[Suburb] {
        &self.suburbs
    }

    pub fn is_empty(&self) -> bool {
        self.suburbs.is_empty()
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Suburb> {
        self.selected.and_then(|index| self.suburbs.get(index))
    }

    pub fn select_next(&mut self) -> Option<&Suburb> {
        let len = self.suburbs.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            None => Some(0),
            Some(index) => Some(wrap_increment(index, len)),
        };
        self.selected()
    }

    pub fn select_previous(&mut self) -> Option<&Suburb> {
        let len = self.suburbs.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            None => Some(len - 1),
            Some(index) => Some(wrap_decrement(index, len)),
        };
        self.selected()
    }

    /// Highlights the suburb with `gnaf_id`, falling back to the first entry.
    pub fn select_initial(&mut self, gnaf_id: Option<&str>) -> Option<&Suburb> {
        let wanted = gnaf_id.and_then(|id| {
            self.suburbs
                .iter()
                .position(|suburb| suburb.gnaf_id.eq_ignore_ascii_case(id))
        });
        self.selected = wanted.or_else(|| (!self.suburbs.is_empty()).then_some(0));
        self.selected()
    }
}

const fn wrap_decrement(index: usize, len: usize) -> usize {
    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

const fn wrap_increment(index: usize, len: usize) -> usize {
    (index + 1) % len
}

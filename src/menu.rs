use std::marker::PhantomData;

use ratatui::{prelude::*, widgets::*};

pub enum MenuSignal<A> {
    None,
    Selected(A),
}

/// A menu entry: either a leaf carrying an action or a submenu.
#[derive(Clone, Debug)]
pub struct MenuItem<A> {
    pub name: String,
    pub action: Option<A>,
    pub children: Vec<MenuItem<A>>,
}

impl<A> MenuItem<A> {
    pub fn submenu(name: &str, children: Vec<MenuItem<A>>) -> Self {
        Self {
            name: name.to_string(),
            action: None,
            children,
        }
    }

    pub fn leaf(name: &str, action: A) -> Self {
        Self {
            name: name.to_string(),
            action: Some(action),
            children: vec![],
        }
    }
}

/// Navigation state: the path of submenu indices and the highlighted row.
#[derive(Debug)]
pub struct MenuState<A> {
    pub root_items: Vec<MenuItem<A>>,
    pub nav_stack: Vec<usize>,
    pub list_state: ListState,
    pub last_selected: Option<A>,
}

impl<A: Clone> MenuState<A> {
    pub fn new(items: Vec<MenuItem<A>>) -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            root_items: items,
            nav_stack: Vec::new(),
            list_state: state,
            last_selected: None,
        }
    }

    pub fn current_items(&self) -> &[MenuItem<A>] {
        let mut current = &self.root_items;
        for &index in &self.nav_stack {
            if let Some(item) = current.get(index) {
                current = &item.children;
            }
        }
        current
    }

    /// Names of the submenus entered so far.
    pub fn breadcrumb(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = &self.root_items;
        for &index in &self.nav_stack {
            if let Some(item) = current.get(index) {
                names.push(item.name.as_str());
                current = &item.children;
            }
        }
        names
    }

    pub fn up(&mut self) {
        let len = self.current_items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn down(&mut self) {
        let len = self.current_items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn enter(&mut self) -> MenuSignal<A> {
        let Some(selected) = self.list_state.selected() else {
            return MenuSignal::None;
        };
        let Some(item) = self.current_items().get(selected) else {
            return MenuSignal::None;
        };

        if !item.children.is_empty() {
            self.nav_stack.push(selected);
            self.list_state.select(Some(0));
            return MenuSignal::None;
        }
        match item.action.clone() {
            Some(action) => {
                self.last_selected = Some(action.clone());
                MenuSignal::Selected(action)
            }
            None => MenuSignal::None,
        }
    }

    pub fn back(&mut self) {
        if let Some(last_index) = self.nav_stack.pop() {
            self.list_state.select(Some(last_index));
        }
    }
}

pub struct Menu<'a, A> {
    block: Option<Block<'a>>,
    highlight_style: Style,
    _action: PhantomData<A>,
}

impl<'a, A> Menu<'a, A> {
    pub fn new() -> Self {
        Self {
            block: None,
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            _action: PhantomData,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }
}

impl<A: Clone> StatefulWidget for Menu<'_, A> {
    type State = MenuState<A>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let list_items: Vec<ListItem> = state
            .current_items()
            .iter()
            .map(|item| {
                let content = if item.children.is_empty() {
                    format!(" {} ", item.name)
                } else {
                    format!(" {} ->", item.name)
                };
                ListItem::new(content)
            })
            .collect();

        let mut list = List::new(list_items)
            .highlight_style(self.highlight_style)
            .highlight_symbol(">> ");

        if let Some(b) = self.block {
            list = list.block(b);
        }

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}

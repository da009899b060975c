use std::collections::HashSet;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use force_graph::{ForceGraph, NodeData};
use graph_lists::{Graph, RootedTree, Traversal, Vertex, render};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as Segment};
use ratatui::{DefaultTerminal, prelude::*, widgets::*};
use tracing::{debug, info};

use crate::menu::{Menu, MenuItem, MenuSignal, MenuState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Prim,
    Kruskal,
    Dijkstra,
    DijkstraDense,
    DepthFirst,
    BreadthFirst,
    Adjacency,
    Quit,
}

fn menu_items() -> Vec<MenuItem<Action>> {
    vec![
        MenuItem::submenu(
            "Minimum spanning tree",
            vec![
                MenuItem::leaf("Prim", Action::Prim),
                MenuItem::leaf("Kruskal", Action::Kruskal),
            ],
        ),
        MenuItem::submenu(
            "Shortest paths",
            vec![
                MenuItem::leaf("Dijkstra (heap)", Action::Dijkstra),
                MenuItem::leaf("Dijkstra (scan)", Action::DijkstraDense),
            ],
        ),
        MenuItem::submenu(
            "Traversal",
            vec![
                MenuItem::leaf("Depth-first", Action::DepthFirst),
                MenuItem::leaf("Breadth-first", Action::BreadthFirst),
            ],
        ),
        MenuItem::leaf("Adjacency lists", Action::Adjacency),
        MenuItem::leaf("Quit", Action::Quit),
    ]
}

pub struct App {
    graph: Graph,
    source: Vertex,
    components: usize,
    menu: MenuState<Action>,
    title: String,
    report: Vec<String>,
    scroll: u16,
    highlight: HashSet<(Vertex, Vertex)>,
    drawing: Drawing,
    exit: bool,
}

impl App {
    pub fn new(graph: Graph, source: Vertex) -> Self {
        let components = graph.kruskal().components();
        let drawing = Drawing::new(&graph);
        let report = render::adjacency(&graph);
        App {
            graph,
            source,
            components,
            menu: MenuState::new(menu_items()),
            title: "Adjacency lists".to_string(),
            report,
            scroll: 0,
            highlight: HashSet::new(),
            drawing,
            exit: false,
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "terminal ui started"
        );
        let mut last = Instant::now();
        while !self.exit {
            let now = Instant::now();
            self.drawing.step((now - last).as_secs_f32().min(0.1));
            last = now;

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(40))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Up | KeyCode::Char('k') => self.menu.up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.down(),
            KeyCode::Esc | KeyCode::Backspace => self.menu.back(),
            KeyCode::Enter => {
                if let MenuSignal::Selected(action) = self.menu.enter() {
                    self.perform(action);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.shift_source(false),
            KeyCode::Right | KeyCode::Char('l') => self.shift_source(true),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(5),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(5),
            _ => {}
        }
    }

    fn shift_source(&mut self, forward: bool) {
        let n = self.graph.vertex_count();
        if n == 0 {
            return;
        }
        self.source = if forward {
            self.source % n + 1
        } else {
            (self.source + n - 2) % n + 1
        };
        debug!(source = self.source, "source changed");
        if let Some(action) = self.menu.last_selected {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: Action) {
        if action == Action::Quit {
            self.exit = true;
            return;
        }
        self.scroll = 0;
        self.title = title(action).to_string();
        match self.evaluate(action) {
            Ok((report, edges)) => {
                self.report = report;
                self.highlight = edges.into_iter().map(|(a, b)| (a.min(b), a.max(b))).collect();
            }
            Err(err) => {
                self.report = vec![format!("error: {err}")];
                self.highlight.clear();
            }
        }
    }

    fn evaluate(&self, action: Action) -> graph_lists::Result<(Vec<String>, Vec<(Vertex, Vertex)>)> {
        let g = &self.graph;
        let s = self.source;
        Ok(match action {
            Action::Prim => {
                let tree = g.prim(s)?;
                (render::prim(&tree), tree.tree_edges())
            }
            Action::Kruskal => {
                let outcome = g.kruskal();
                let edges = outcome.forest().edges().iter().map(|e| (e.u, e.v)).collect();
                (render::kruskal(&outcome), edges)
            }
            Action::Dijkstra => {
                let tree = g.dijkstra(s)?;
                (render::dijkstra(&tree), tree.tree_edges())
            }
            Action::DijkstraDense => {
                let tree = g.dijkstra_dense(s)?;
                (render::dijkstra(&tree), tree.tree_edges())
            }
            Action::DepthFirst => {
                let traversal = g.dfs(s)?;
                (render::dfs(&traversal), discovery_edges(&traversal))
            }
            Action::BreadthFirst => {
                let traversal = g.bfs(s)?;
                (render::bfs(&traversal), discovery_edges(&traversal))
            }
            Action::Adjacency | Action::Quit => (render::adjacency(g), Vec::new()),
        })
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [main, help] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [left, right] =
            Layout::horizontal([Constraint::Length(32), Constraint::Min(0)]).areas(main);
        let [menu_area, info_area] =
            Layout::vertical([Constraint::Min(8), Constraint::Length(5)]).areas(left);
        let [report_area, canvas_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(right);

        let crumbs = self.menu.breadcrumb();
        let menu_title = if crumbs.is_empty() {
            " Algorithms ".to_string()
        } else {
            format!(" {} ", crumbs.join(" / "))
        };
        frame.render_stateful_widget(
            Menu::<Action>::new()
                .block(Block::bordered().title(menu_title))
                .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan)),
            menu_area,
            &mut self.menu,
        );

        let info = vec![
            Line::from(format!(
                "Vertices: {}  Edges: {}",
                self.graph.vertex_count(),
                self.graph.edge_count()
            )),
            Line::from(format!("Source: {}", render::letter(self.source))),
            Line::from(if self.components == 1 {
                "Connected".to_string()
            } else {
                format!("{} components", self.components)
            }),
        ];
        frame.render_widget(
            Paragraph::new(info).block(Block::bordered().title(" Graph ")),
            info_area,
        );

        let report: Vec<Line> = self.report.iter().map(|l| Line::from(l.as_str())).collect();
        frame.render_widget(
            Paragraph::new(report)
                .block(Block::bordered().title(format!(" {} ", self.title)))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            report_area,
        );

        frame.render_widget(self.canvas(), canvas_area);

        frame.render_widget(
            Paragraph::new(
                "↑/↓ move  Enter select  Esc back  ←/→ source  PgUp/PgDn scroll  q quit",
            )
            .style(Style::default().fg(Color::DarkGray)),
            help,
        );
    }

    fn canvas(&self) -> impl Widget + '_ {
        let ([x0, x1], [y0, y1]) = self.drawing.bounds();
        Canvas::default()
            .block(Block::bordered().title(" Layout "))
            .marker(Marker::Braille)
            .x_bounds([x0, x1])
            .y_bounds([y0, y1])
            .paint(move |ctx| {
                for edge in self.graph.edges() {
                    let (ax, ay) = self.drawing.position(edge.u);
                    let (bx, by) = self.drawing.position(edge.v);
                    let lit = self.highlight.contains(&(edge.u.min(edge.v), edge.u.max(edge.v)));
                    ctx.draw(&Segment {
                        x1: ax,
                        y1: ay,
                        x2: bx,
                        y2: by,
                        color: if lit { Color::Yellow } else { Color::DarkGray },
                    });
                }
                ctx.layer();
                for v in self.graph.vertices() {
                    let (x, y) = self.drawing.position(v);
                    let style = if v == self.source {
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ctx.print(x, y, Span::styled(render::letter(v), style));
                }
            })
    }
}

fn title(action: Action) -> &'static str {
    match action {
        Action::Prim => "Prim",
        Action::Kruskal => "Kruskal",
        Action::Dijkstra => "Dijkstra (heap)",
        Action::DijkstraDense => "Dijkstra (scan)",
        Action::DepthFirst => "Depth-first",
        Action::BreadthFirst => "Breadth-first",
        Action::Adjacency | Action::Quit => "Adjacency lists",
    }
}

fn discovery_edges(traversal: &Traversal) -> Vec<(Vertex, Vertex)> {
    traversal
        .visits()
        .iter()
        .filter_map(|visit| visit.via.map(|p| (p, visit.vertex)))
        .collect()
}

/// Force-directed layout of the graph, stepped once per frame.
struct Drawing {
    sim: ForceGraph<Vertex, ()>,
    positions: Vec<(f64, f64)>,
}

impl Drawing {
    const WARM_UP_STEPS: usize = 300;

    fn new(graph: &Graph) -> Self {
        let mut sim: ForceGraph<Vertex, ()> = ForceGraph::new(Default::default());
        let n = graph.vertex_count().max(1) as f32;
        let nodes: Vec<_> = graph
            .vertices()
            .map(|v| {
                let angle = v as f32 / n * TAU;
                sim.add_node(NodeData {
                    x: 200.0 * angle.cos(),
                    y: 200.0 * angle.sin(),
                    user_data: v,
                    ..Default::default()
                })
            })
            .collect();
        for edge in graph.edges() {
            sim.add_edge(nodes[edge.u - 1], nodes[edge.v - 1], Default::default());
        }

        let mut drawing = Drawing {
            sim,
            positions: vec![(0.0, 0.0); graph.vertex_count() + 1],
        };
        for _ in 0..Self::WARM_UP_STEPS {
            drawing.step(0.035);
        }
        drawing
    }

    fn step(&mut self, dt: f32) {
        self.sim.update(dt);
        let positions = &mut self.positions;
        self.sim.visit_nodes(|node| {
            positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
        });
    }

    fn position(&self, v: Vertex) -> (f64, f64) {
        self.positions.get(v).copied().unwrap_or_default()
    }

    fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let placed = self.positions.get(1..).unwrap_or_default();
        let (mut x0, mut x1, mut y0, mut y1) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
        for &(x, y) in placed {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        if placed.is_empty() {
            return ([-1.0, 1.0], [-1.0, 1.0]);
        }
        let pad_x = ((x1 - x0) * 0.1).max(1.0);
        let pad_y = ((y1 - y0) * 0.1).max(1.0);
        ([x0 - pad_x, x1 + pad_x], [y0 - pad_y, y1 + pad_y])
    }
}

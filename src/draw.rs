use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::rounds::RoundsGrid;
use crate::render;
use crate::state::poller::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;

static TABS: &[&str; 3] = &["Overview", "Rounds", "Participants"];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
            }

            match app.state.active_tab {
                MenuItem::Overview => draw_overview(f, layout.main, app),
                MenuItem::Rounds => draw_rounds(f, layout.main, app),
                MenuItem::Participants => draw_participants(f, layout.main, app),
                MenuItem::Help => draw_placeholder(
                    f,
                    layout.main,
                    "Help: q=quit  1=Overview  2=Rounds  3=Participants  j/k=scroll  r=refresh  \"=logs  f=fullscreen",
                ),
            }

            if app.state.show_logs {
                draw_logs(f, layout.main);
            }

            draw_loading_spinner(f, f.area(), loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Overview | MenuItem::Help => 0,
        MenuItem::Rounds => 1,
        MenuItem::Participants => 2,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(tui::style::Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

// ---------------------------------------------------------------------------
// Overview tab — status summary, live match, upcoming / recent lists
// ---------------------------------------------------------------------------

fn draw_overview(f: &mut Frame, area: Rect, app: &App) {
    let Some(payload) = app.state.status.payload.as_ref() else {
        draw_placeholder(f, area, "Loading tournament status...");
        return;
    };
    let tournament = payload.tournament.as_ref();

    let [status_area, current_area, lists_area] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Fill(1),
    ])
    .areas(area);

    let status_block = default_border(Color::White).title(" Status ");
    let status_inner = status_block.inner(status_area);
    f.render_widget(status_block, status_area);
    f.render_widget(
        Paragraph::new(render::status_summary(payload)).wrap(Wrap { trim: false }),
        status_inner,
    );

    let current_block = default_border(Color::Yellow).title(" Live Match ");
    let current_inner = current_block.inner(current_area);
    f.render_widget(current_block, current_area);
    f.render_widget(Paragraph::new(render::current_match(tournament)), current_inner);

    let [upcoming_area, recent_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(lists_area);

    let upcoming = tournament.map(|t| t.upcoming_matches.as_slice()).unwrap_or_default();
    let upcoming_block = default_border(Color::DarkGray).title(" Up Next ");
    let upcoming_inner = upcoming_block.inner(upcoming_area);
    f.render_widget(upcoming_block, upcoming_area);
    f.render_widget(
        Paragraph::new(render::match_list(upcoming, render::NO_UPCOMING)),
        upcoming_inner,
    );

    let recent = tournament.map(|t| t.recent_matches.as_slice()).unwrap_or_default();
    let recent_block = default_border(Color::DarkGray).title(" Recent Results ");
    let recent_inner = recent_block.inner(recent_area);
    f.render_widget(recent_block, recent_area);
    f.render_widget(
        Paragraph::new(render::match_list(recent, render::NO_RECENT)),
        recent_inner,
    );
}

// ---------------------------------------------------------------------------
// Rounds tab
// ---------------------------------------------------------------------------

fn draw_rounds(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Rounds ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(
        RoundsGrid {
            tournament: app.state.status.tournament(),
            scroll: app.state.status.rounds_scroll,
        },
        inner,
    );
}

// ---------------------------------------------------------------------------
// Participants tab
// ---------------------------------------------------------------------------

fn draw_participants(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Participants ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(
        Paragraph::new(render::participants(app.state.status.tournament()))
            .scroll((app.state.status.participants_scroll, 0)),
        inner,
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let height = area.height.min(12);
    let overlay = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height),
        area.width,
        height,
    );
    f.render_widget(Clear, overlay);
    f.render_widget(
        TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs ")),
        overlay,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, loading: LoadingState) {
    if loading.spinner_char == ' ' {
        return;
    }
    if area.width < 4 || area.height < 2 {
        return;
    }
    let corner = Rect::new(area.x + area.width - 3, area.y + 1, 1, 1);
    let style = if loading.spinner_char == ERROR_CHAR {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(
        Paragraph::new(loading.spinner_char.to_string()).style(style),
        corner,
    );
}

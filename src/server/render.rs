//! HTML rendering for the start, mode and game pages.
//!
//! Pages are assembled as plain strings. Any text coming from the browser goes
//! through `escape_html` first.

use crate::game::{Cell, Difficulty, Game, Gravity, Mode, Outcome, Player, Position};
use crate::server::state::ActiveGame;

/// Escape text for use in HTML content and single- or double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn player_class(player: Player) -> &'static str {
    match player {
        Player::One => "p1",
        Player::Two => "p2",
    }
}

fn token_color(player: Player) -> &'static str {
    match player {
        Player::One => "red",
        Player::Two => "yellow",
    }
}

fn gravity_arrow(gravity: Gravity) -> &'static str {
    match gravity {
        Gravity::Down => "↓",
        Gravity::Up => "↑",
    }
}

fn gravity_class(gravity: Gravity) -> &'static str {
    match gravity {
        Gravity::Down => "gravity-down",
        Gravity::Up => "gravity-up",
    }
}

/// Message shown once the game is over, from player one's point of view.
pub fn end_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(Player::One) => Some("🎉 Victory!"),
        Outcome::Won(Player::Two) => Some("💀 Defeat!"),
        Outcome::Draw => Some("Draw!"),
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang='en'>\n<head>\n<meta charset='utf-8'>\n\
         <meta name='viewport' content='width=device-width, initial-scale=1'>\n\
         <title>{}</title>\n<link rel='stylesheet' href='/style.css'>\n\
         <link rel='icon' type='image/svg+xml' href='/favicon.svg'>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Board table, column selectors and game controls, wrapped in the move form.
pub fn render_board(game: &Game) -> String {
    let arrow = gravity_arrow(game.gravity());
    let winning: Vec<Position> = game
        .winning_positions()
        .map(|line| line.to_vec())
        .unwrap_or_default();

    let mut html = String::from(
        "<form method='POST' id='board-form'><input type='hidden' name='col' id='col-input'/>\n",
    );
    html.push_str(&format!(
        "<div class='board-wrap {} {}' id='board-wrap'>\n",
        player_class(game.current_player()),
        gravity_class(game.gravity())
    ));
    html.push_str(&format!(
        "<table class='board' id='board' data-gameover='{}' data-current='{}'>\n",
        u8::from(game.is_over()),
        game.current_player().number()
    ));

    // Selector row, one arrow per column pointing along the gravity.
    html.push_str("<tr>");
    for col in 0..game.cols() {
        if game.is_over() {
            html.push_str(&format!(
                "<td class='selector-cell'><div class='selector-token disabled'><span class='selector-arrow'>{}</span></div></td>",
                arrow
            ));
        } else {
            html.push_str(&format!(
                "<td class='selector-cell'><div class='selector-token' data-col='{}' title='Play column {}'><span class='selector-arrow'>{}</span></div></td>",
                col,
                col + 1,
                arrow
            ));
        }
    }
    html.push_str("</tr>\n");

    for (row, cells) in game.grid().iter().enumerate() {
        html.push_str("<tr>");
        for (col, &cell) in cells.iter().enumerate() {
            let here = Position { row, col };
            let token = match cell {
                Cell::Empty => String::new(),
                Cell::Taken(player) => {
                    let wrap_class = if game.last_move() == Some(here) { " just-played" } else { "" };
                    let token_class = if winning.contains(&here) { " winner-token" } else { "" };
                    format!(
                        "<div class='token-wrap{}'><div class='token {}{}'></div></div>",
                        wrap_class,
                        token_color(player),
                        token_class
                    )
                }
            };
            html.push_str(&format!("<td data-col='{}'>{}</td>", col, token));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</div>\n");

    html.push_str("<div class='controls'><button name='reset' value='1'>New game</button>");
    if game.is_over() {
        html.push_str("<button name='rematch' value='1'>Rematch</button>");
    }
    html.push_str("</div></form>\n");

    html.push_str(
        "<script>\n\
         document.querySelectorAll('.selector-token:not(.disabled)').forEach(function(div) {\n\
         \tdiv.addEventListener('click', function() {\n\
         \t\tdocument.getElementById('col-input').value = div.getAttribute('data-col');\n\
         \t\tdocument.getElementById('board-form').submit();\n\
         \t});\n\
         });\n\
         </script>",
    );
    html
}

pub fn start_document() -> String {
    let body = "<main class='card'>\n<h1>Connect 4</h1>\n\
        <form method='POST' action='/'>\n\
        <label>Name <input type='text' name='username' required maxlength='32'></label>\n\
        <label>Difficulty <select name='difficulty'>\n\
        <option value='standard'>Classic (6×7)</option>\n\
        <option value='easy'>Easy (6×7, 3 random tokens)</option>\n\
        <option value='normal'>Normal (7×8, 5 random tokens)</option>\n\
        <option value='hard'>Hard (8×10, 7 random tokens)</option>\n\
        </select></label>\n\
        <button type='submit'>Continue</button>\n</form>\n</main>";
    page("Connect 4", body)
}

pub fn mode_document(username: &str, difficulty: &str) -> String {
    let body = format!(
        "<main class='card'>\n<h1>Choose a mode</h1>\n\
         <form method='POST' action='/mode'>\n\
         <input type='hidden' name='username' value='{}'>\n\
         <input type='hidden' name='difficulty' value='{}'>\n\
         <label><input type='radio' name='mode' value='{}' checked> Normal: tokens fall down</label>\n\
         <label><input type='radio' name='mode' value='{}'> Inverse: tokens rise up</label>\n\
         <p class='hint'>In both modes gravity reverses every 5 turns.</p>\n\
         <button type='submit'>Play</button>\n</form>\n</main>",
        escape_html(username),
        escape_html(difficulty),
        Mode::Normal.as_param(),
        Mode::Inverse.as_param()
    );
    page("Connect 4 - Mode", &body)
}

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Standard => "Classic",
        Difficulty::Easy => "Easy",
        Difficulty::Normal => "Normal",
        Difficulty::Hard => "Hard",
    }
}

pub fn game_document(active: &ActiveGame) -> String {
    let game = &active.game;
    let settings = &active.settings;

    let mut body = String::from("<main class='game'>\n<header class='status'>\n");
    body.push_str(&format!(
        "<span class='username'>{}</span> <span class='difficulty'>{}</span> <span class='mode'>{}</span>\n",
        escape_html(&settings.username),
        difficulty_label(settings.difficulty),
        settings.mode.as_param()
    ));
    body.push_str(&format!(
        "<span class='turn'>Turn {}</span> <span class='gravity'>Gravity {}</span>\n",
        game.turn_count() + 1,
        gravity_arrow(game.gravity())
    ));
    match end_message(game.outcome()) {
        Some(message) => body.push_str(&format!("<p class='end-message'>{}</p>\n", message)),
        None => body.push_str(&format!(
            "<p class='current {}'>Player {} to play</p>\n",
            player_class(game.current_player()),
            game.current_player().number()
        )),
    }
    body.push_str("</header>\n");
    body.push_str(&render_board(game));
    body.push_str("\n</main>");
    page("Connect 4", &body)
}

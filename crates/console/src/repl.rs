use crate::view;
use anyhow::Result;
use shared::{
    abstract_trait::DynOperatorNotices,
    model::OrderStatus,
    service::order::DisclosureWindow,
    state::AppState,
};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

fn help_text() -> String {
    let states = OrderStatus::ALL
        .iter()
        .filter_map(|status| status.label())
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "\
Comandos:
  reload              vuelve a cargar los pedidos
  more                muestra 5 pedidos más
  status <id> <estado> cambia el estado de un pedido
  help                muestra esta ayuda
  quit                salir

Estados: {states}"
    )
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Reload,
    More,
    Status { order_id: String, status: OrderStatus },
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or("").to_lowercase();

        match head.as_str() {
            "reload" | "r" => Ok(Command::Reload),
            "more" | "m" => Ok(Command::More),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "status" | "s" => {
                let order_id = parts
                    .next()
                    .ok_or_else(|| "Uso: status <id> <estado>".to_string())?
                    .to_string();
                let rest = parts.collect::<Vec<_>>().join(" ");
                let status = OrderStatus::from_selector(&rest)
                    .ok_or_else(|| format!("Estado desconocido: '{rest}'"))?;
                Ok(Command::Status { order_id, status })
            }
            "" => Err(String::new()),
            other => Err(format!("Comando desconocido: '{other}' (escribe 'help')")),
        }
    }
}

pub async fn run(state: &AppState, notices: DynOperatorNotices) -> Result<()> {
    let store = state.di_container.order_store.clone();
    let transitions = state.di_container.status_transition.clone();
    let mut window = DisclosureWindow::new();

    if let Err(e) = store.load().await {
        notices.error(&e.to_string());
    }
    render(state, &window).await;
    println!("{}", help_text());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim().parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", help_text()),
            Ok(Command::Reload) => {
                if let Err(e) = store.load().await {
                    notices.error(&e.to_string());
                }
                render(state, &window).await;
            }
            Ok(Command::More) => {
                window.expand();
                render(state, &window).await;
            }
            Ok(Command::Status { order_id, status }) => {
                let snapshot = store.current().await;
                match snapshot.iter().find(|order| order.id == order_id) {
                    Some(order) => {
                        let outcome = transitions
                            .set_status(
                                &order_id,
                                status,
                                &order.address.email,
                                &order.order_number,
                            )
                            .await;
                        // Only a persisted change refreshes the snapshot;
                        // without one there is nothing new to render.
                        if outcome.persisted {
                            render(state, &window).await;
                        }
                    }
                    None => notices.error(&format!("Pedido {order_id} no encontrado.")),
                }
            }
            Err(message) if message.is_empty() => {}
            Err(message) => println!("{message}"),
        }
    }

    Ok(())
}

async fn render(state: &AppState, window: &DisclosureWindow) {
    let orders = state.di_container.order_store.current().await;
    print!(
        "{}",
        view::render_orders(&orders, window, &state.config.currency)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_command_with_multi_word_state() {
        let command = "status 66f0a1 pedido realizado".parse::<Command>().unwrap();
        assert_eq!(
            command,
            Command::Status {
                order_id: "66f0a1".to_string(),
                status: OrderStatus::Placed,
            }
        );
    }

    #[test]
    fn parses_shorthand_commands() {
        assert_eq!("r".parse::<Command>().unwrap(), Command::Reload);
        assert_eq!("m".parse::<Command>().unwrap(), Command::More);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn help_lists_every_known_state() {
        let help = help_text();
        for status in OrderStatus::ALL {
            assert!(help.contains(status.label().unwrap()));
        }
        assert_eq!(
            help.lines().last().unwrap(),
            "Estados: Pedido realizado | Pagado | Empacando | Enviado"
        );
    }

    #[test]
    fn rejects_unknown_states_and_commands() {
        assert!("status 66f0a1 cancelado".parse::<Command>().is_err());
        assert!("status".parse::<Command>().is_err());
        assert!("frobnicate".parse::<Command>().is_err());
    }
}

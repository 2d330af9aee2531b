use std::env;
use std::sync::Arc;

use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use ledger_xfer::csv::{read_accounts, read_transfers, write_accounts};
use ledger_xfer::{AccountStore, TransferService};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let accounts_path = args
        .next()
        .expect("usage: ledger-xfer <accounts.csv> <transfers.csv>");
    let transfers_path = args
        .next()
        .expect("usage: ledger-xfer <accounts.csv> <transfers.csv>");

    let accounts = read_accounts(&accounts_path).expect("failed to read accounts file");
    let store = AccountStore::from_accounts(accounts).expect("invalid initial account set");
    let service = TransferService::new(Arc::new(store));

    let (tx_sender, tx_receiver) = tokio::sync::mpsc::channel(16);

    let reader = tokio::spawn(async move {
        match read_transfers(&transfers_path) {
            Ok(rows) => {
                for result in rows {
                    match result {
                        Ok(raw) => {
                            if tx_sender.send(raw).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("{e}");
                        }
                    }
                }
            }
            Err(e) => {
                warn!("{e}");
            }
        }
    });

    service.run(ReceiverStream::new(tx_receiver)).await;
    reader.await.expect("transfer reader task panicked");

    write_accounts(service.snapshot()).expect("failed to write balance report");
}

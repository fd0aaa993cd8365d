use anyhow::{bail, Context, Result};
use banking::data::{load_from_dir, BankData, InMemoryBank};
use banking::flow::payment::display_date;
use banking::ledger::{self, AmountTone, ChartFrame};
use banking::util::format::format_currency;
use banking::{
    Advance, Config, FlowController, JointAccountField, JointAccountFields, JointAccountFlow, JointAccountStep,
    Notification, PaymentField, PaymentFields, PaymentFlow, RedirectTimer, Route, ValidationError,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "banking", about = "Accounts, payments and joint-account setup against the demo bank")]
struct Cli {
    /// Directory holding `bank.yaml`. Overrides the config file.
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists every account with its balance.
    Accounts,
    /// Shows one account and its transactions.
    Account {
        /// Account id; the default account is shown when omitted or unknown.
        id: Option<String>,
        /// Filters transactions by description or amount.
        #[arg(long)]
        search: Option<String>,
    },
    /// Prints the income/expense overview.
    Overview,
    /// Walks the joint-account setup.
    JointAccount {
        #[arg(long)]
        email: String,
        #[arg(long)]
        agree_terms: bool,
    },
    /// Fills in, reviews and confirms a payment.
    Pay {
        /// Funding source id, e.g. `acc_checking_001`.
        #[arg(long)]
        from: String,
        #[arg(long)]
        to_name: String,
        #[arg(long)]
        to_account: String,
        #[arg(long)]
        amount: String,
        /// YYYY-MM-DD, today when omitted.
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Stops at the review step and goes back instead of confirming.
        #[arg(long)]
        cancel: bool,
    },
    /// Prints the initial profile settings.
    Settings,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading banking.toml")?;
    if let Some(dir) = cli.fixtures.clone() {
        config.data.fixtures_dir = Some(dir);
    }
    let bank = open_bank(&config)?;

    match cli.command {
        Commands::Accounts => list_accounts(bank.as_ref()),
        Commands::Account { id, search } => show_account(bank.as_ref(), id.as_deref(), search.as_deref()),
        Commands::Overview => show_overview(bank.as_ref()),
        Commands::JointAccount { email, agree_terms } => {
            run_joint_account(&config, &email, agree_terms).await?
        }
        Commands::Pay { from, to_name, to_account, amount, date, notes, cancel } => {
            let mut fields = vec![
                PaymentField::SourceAccount(from),
                PaymentField::RecipientName(to_name),
                PaymentField::RecipientAccount(to_account),
                PaymentField::Amount(amount),
            ];
            fields.extend(date.map(PaymentField::PaymentDate));
            fields.extend(notes.map(PaymentField::Notes));
            run_payment(&config, bank.as_ref(), fields, cancel).await?
        }
        Commands::Settings => {
            println!("{}", serde_json::to_string_pretty(&bank.profile())?);
        }
    }
    Ok(())
}

fn open_bank(config: &Config) -> Result<Arc<dyn BankData>> {
    let bank = match &config.data.fixtures_dir {
        Some(dir) => InMemoryBank::new(
            load_from_dir(dir).with_context(|| format!("loading fixtures from {}", dir.display()))?,
        ),
        None => InMemoryBank::builtin()?,
    };
    Ok(Arc::new(bank))
}

fn list_accounts(bank: &dyn BankData) {
    for account in bank.accounts() {
        let marker = if account.show_on_dashboard { "*" } else { " " };
        println!(
            "{} {:<16} {:<24} {:>16}",
            marker,
            account.id,
            account.name,
            format_currency(account.balance, &account.currency)
        );
    }
}

fn show_account(bank: &dyn BankData, id: Option<&str>, term: Option<&str>) {
    let Some(account) = bank.resolve_account(id) else {
        println!("Account not found.");
        return;
    };
    if let Some(requested) = id.filter(|requested| *requested != account.id) {
        debug!(requested, shown = %account.id, "unknown account, showing default");
    }

    println!("🏦 {} ({})", account.name, account.id);
    println!("   Balance: {}", format_currency(account.balance, &account.currency));

    let transactions = ledger::search(&bank.transactions(&account.id), term.unwrap_or(""));
    if transactions.is_empty() {
        println!("   No transactions found.");
        return;
    }
    for tx in &transactions {
        let marker = match ledger::tone(tx.kind) {
            AmountTone::Credit => "▲",
            AmountTone::Debit => "▼",
            AmountTone::Neutral => "•",
        };
        println!(
            "   {} {:<28} {:>14}  {}",
            marker,
            tx.description,
            ledger::display_amount(tx),
            ledger::display_meta(tx)
        );
    }
}

fn show_overview(bank: &dyn BankData) {
    let overview = bank.overview();
    println!("📈 {}", overview.title);
    println!("   {}", overview.description);

    let Some(frame) = ChartFrame::from_overview(&overview) else {
        println!("   {}", ledger::chart::EMPTY_CHART_MESSAGE);
        return;
    };

    print!("   {:<10}", "");
    for line in &frame.lines {
        print!("{:>12}", line.series.name);
    }
    println!();
    for point in &overview.points {
        print!("   {:<10}", point.label);
        for line in &frame.lines {
            let value = point.values.get(&line.series.key).copied().unwrap_or(0.0);
            print!("{:>12.0}", value);
        }
        println!();
    }
    println!("   max {:.0}", frame.max_value);
}

fn announce(notice: &Notification) {
    let icon = if notice.is_error() { "🔥" } else { "✅" };
    println!("{} {}: {}", icon, notice.title, notice.description);
}

fn report(err: &ValidationError) {
    for issue in err.issues() {
        match issue.field {
            Some(field) => println!("   🔥 {}: {}", field, issue.message),
            None => println!("   🔥 {}", issue.message),
        }
    }
}

/// Waits until the pending redirect is due and returns its target.
async fn follow_redirect(timer: &mut RedirectTimer, clock: Instant) -> Option<Route> {
    let remaining = timer.pending()?.remaining(clock.elapsed());
    tokio::time::sleep(remaining).await;
    timer.poll(clock.elapsed())
}

async fn redirect_after(target: Route, delay: Duration) -> Option<Route> {
    let clock = Instant::now();
    let mut timer = RedirectTimer::new();
    timer.schedule(target, delay, clock.elapsed());
    follow_redirect(&mut timer, clock).await
}

async fn run_joint_account(config: &Config, email: &str, agree_terms: bool) -> Result<()> {
    let (tx, rx) = mpsc::channel::<JointAccountFields>();
    let mut flow = FlowController::<JointAccountFlow>::new(move |fields| {
        let _ = tx.send(fields);
    });
    flow.set_field(JointAccountField::CoholderEmail(email.to_string()));

    loop {
        println!(
            "▶ Step {} of {}: {}",
            flow.ordinal(),
            flow.total_steps(),
            flow.current().title
        );
        if flow.current_step() == JointAccountStep::FinalizeTerms {
            flow.set_field(JointAccountField::TermsAgreed(agree_terms));
        }

        match flow.advance() {
            Ok(Advance::Moved { notice, .. }) => {
                if let Some(notice) = notice {
                    announce(&notice);
                }
            }
            Ok(Advance::Completed) | Ok(Advance::AlreadyCompleted) => break,
            Err(err) => {
                report(&err);
                bail!("joint account setup stopped at step {}", flow.ordinal());
            }
        }
    }

    announce(&JointAccountFlow::completion_notice());
    let fields = rx.recv().context("completion callback did not run")?;
    println!("{}", serde_json::to_string_pretty(&fields)?);
    announce(&JointAccountFlow::initiated_notice(&fields));

    if let Some(target) = redirect_after(Route::Dashboard, config.redirect_delay()).await {
        println!("→ {}", target.path());
    }
    Ok(())
}

async fn run_payment(
    config: &Config,
    bank: &dyn BankData,
    fields: Vec<PaymentField>,
    cancel: bool,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<PaymentFields>();
    let mut flow = FlowController::<PaymentFlow>::new(move |fields| {
        let _ = tx.send(fields);
    });
    for field in fields {
        flow.set_field(field);
    }

    println!("▶ {}", flow.current().title);
    if let Err(err) = flow.advance() {
        report(&err);
        bail!("payment details are invalid");
    }

    // The guard just passed, so the form parses.
    let instruction = flow.fields().parse()?;
    let (source, currency) = match bank.funding_source(&instruction.source_account) {
        Some(source) => (source.short_label(), source.currency),
        None => (instruction.source_account.clone(), "USD".to_string()),
    };
    println!("▶ {}", flow.current().title);
    println!("   From:    {}", source);
    println!("   To:      {} ({})", instruction.recipient_name, instruction.recipient_account);
    println!("   Amount:  {}", format_currency(instruction.amount, &currency));
    println!("   Date:    {}", display_date(instruction.payment_date));
    if let Some(notes) = &instruction.notes {
        println!("   Notes:   {}", notes);
    }

    if cancel {
        if let Some(step) = flow.retreat() {
            info!(?step, "payment review cancelled");
        }
        println!("↩ Back to {}", flow.current().title);
        return Ok(());
    }

    flow.advance()?;
    let submitted = rx.recv().context("completion callback did not run")?;
    let submission = submitted.parse()?.submit();
    announce(&PaymentFlow::processing_notice());
    println!("{}", serde_json::to_string_pretty(&submission)?);

    if redirect_after(Route::Payments, config.redirect_delay()).await.is_some() {
        let fresh = FlowController::<PaymentFlow>::new(|_| {});
        println!("→ New payment: {}", fresh.current().title);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_pay() {
        let cli = Cli::try_parse_from([
            "banking",
            "pay",
            "--from",
            "acc_checking_001",
            "--to-name",
            "John Doe",
            "--to-account",
            "000-123-456",
            "--amount",
            "25",
            "--cancel",
        ])
        .unwrap();
        match cli.command {
            Commands::Pay { from, date, cancel, .. } => {
                assert_eq!(from, "acc_checking_001");
                assert_eq!(date, None);
                assert!(cancel);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_fixtures_flag() {
        let cli = Cli::try_parse_from(["banking", "accounts", "--fixtures", "banking/fixtures"]).unwrap();
        assert_eq!(cli.fixtures, Some(PathBuf::from("banking/fixtures")));
    }

    #[tokio::test]
    async fn test_redirect_fires_after_delay() {
        let target = redirect_after(Route::Dashboard, Duration::from_millis(5)).await;
        assert_eq!(target, Some(Route::Dashboard));
    }

    #[tokio::test]
    async fn test_joint_account_runs_to_completion() {
        let config = Config {
            flows: banking::config::FlowConfig { redirect_delay_ms: 0 },
            ..Config::default()
        };
        run_joint_account(&config, "jane@example.com", true).await.unwrap();
        assert!(run_joint_account(&config, "jane@example.com", false).await.is_err());
    }

    #[tokio::test]
    async fn test_payment_confirm_and_cancel() {
        let config = Config {
            flows: banking::config::FlowConfig { redirect_delay_ms: 0 },
            ..Config::default()
        };
        let bank = InMemoryBank::builtin().unwrap();
        let fields = || {
            vec![
                PaymentField::SourceAccount("acc_checking_001".into()),
                PaymentField::RecipientName("John Doe".into()),
                PaymentField::RecipientAccount("000-123-456".into()),
                PaymentField::Amount("25".into()),
            ]
        };
        run_payment(&config, &bank, fields(), false).await.unwrap();
        run_payment(&config, &bank, fields(), true).await.unwrap();
        assert!(run_payment(&config, &bank, Vec::new(), false).await.is_err());
    }
}

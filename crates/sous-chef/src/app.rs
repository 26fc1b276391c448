use crate::{
    AppCommand, AppResult, Catalog, DesktopNotifier, TimerAction, command_parser, config::Config,
};

use std::sync::Arc;

use sous_chef_core::{
    CHEF_MASTER, CULINARY_CRITIC, CompletionCallback, CookingProgress, EventSink, ProgressUpdate,
    Recipe, SortOption, StarRating, Step, StepTimer, SubstitutionCard, TimerRunner, Toast,
    chart_data, filter_and_sort,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// An in-progress cooking session for one recipe.
struct CookSession {
    recipe_id: u32,
    steps: Vec<Step>,
    progress: CookingProgress,
    /// Countdown for a timed step, once armed.
    timer: Option<TimerRunner>,
    /// Step the active countdown belongs to (zero-based).
    timer_step: Option<usize>,
}

/// Main application state.
///
/// Runs on the async runtime. Console lines arrive through a blocking
/// stdin forwarder task; internal events (countdown completions) arrive
/// through the event channel so they are serialized with console commands
/// on the same loop.
pub struct App {
    config: Config,
    catalog: Catalog,
    sink: Arc<DesktopNotifier>,
    event_tx: mpsc::Sender<AppCommand>,
    event_rx: mpsc::Receiver<AppCommand>,
    session: Option<CookSession>,
    card: Option<SubstitutionCard>,
    rating: Option<(u32, StarRating)>,
}

impl App {
    /// Assemble the companion around its catalog and notifier.
    pub fn new(config: Config, catalog: Catalog, sink: Arc<DesktopNotifier>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(32);

        Self {
            config,
            catalog,
            sink,
            event_tx,
            event_rx,
            session: None,
            card: None,
            rating: None,
        }
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> AppResult<()> {
        info!("Sous-Chef companion starting");
        println!("Sous-Chef — type 'help' for commands.");

        // Console forwarding via single persistent blocking task.
        //
        // stdin's read_line is blocking, so a spawn_blocking task owns it
        // and forwards lines over an mpsc channel.
        //
        // Shutdown: when line_rx is dropped (main loop breaks), the next
        // blocking_send() fails, breaking the blocking loop.
        let (line_tx, mut line_rx) = mpsc::channel::<String>(32);
        let reader_handle = tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            loop {
                let mut line = String::new();
                match stdin.read_line(&mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        if line_tx.blocking_send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!(error = ?e, "Failed to read console input");
                        break;
                    }
                }
            }
        });

        loop {
            tokio::select! {
                maybe_line = line_rx.recv() => {
                    // None means stdin reached EOF; the app cannot receive
                    // further commands, so shut down rather than idle on
                    // internal events alone.
                    let Some(line) = maybe_line else {
                        info!("Console input closed, shutting down");
                        break;
                    };
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match command_parser::parse_command(trimmed) {
                        Ok(AppCommand::Quit) => {
                            info!("Quit requested");
                            break;
                        }
                        Ok(command) => {
                            if let Err(e) = self.handle_command(command).await {
                                error!(error = ?e, "Command failed");
                                println!("error: {e}");
                            }
                        }
                        Err(e) => {
                            debug!(error = ?e, "Unparseable command");
                            println!("{e}");
                            println!("Type 'help' for the command reference.");
                        }
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    if let Err(e) = self.handle_command(event).await {
                        error!(error = ?e, "Internal event failed");
                    }
                }
            }
        }

        drop(line_rx);

        // Cancel an in-flight countdown so its tick task stops.
        if let Some(session) = self.session.take() {
            if let Some(timer) = session.timer {
                timer.reset().await;
            }
        }

        // Best-effort join: the blocking task may be stuck in read_line
        // until the next console line arrives. Use a timeout to avoid
        // hanging; the task is cleaned up on process exit regardless.
        match tokio::time::timeout(std::time::Duration::from_secs(1), reader_handle).await {
            Ok(Ok(())) => info!("Console forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Console forwarder task panicked"),
            Err(_) => info!(
                "Console forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        info!("Sous-Chef shut down successfully");

        Ok(())
    }

    async fn handle_command(&mut self, command: AppCommand) -> AppResult<()> {
        match command {
            AppCommand::Browse {
                filters,
                sort,
                limit,
            } => {
                self.browse(&filters, sort, limit);
                Ok(())
            }
            AppCommand::Categories => {
                self.list_categories();
                Ok(())
            }
            AppCommand::Show { recipe_id } => {
                self.show(recipe_id);
                Ok(())
            }
            AppCommand::Cook { recipe_id } => self.cook(recipe_id).await,
            AppCommand::SelectStep { step } => self.select_step(step),
            AppCommand::ToggleStep { step } => self.toggle_step(step),
            AppCommand::Timer(action) => self.timer_action(action).await,
            AppCommand::TimerFinished { step } => self.timer_finished(step),
            AppCommand::Rate { stars } => self.rate(stars),
            AppCommand::Substitute { ingredient } => {
                self.substitute(&ingredient);
                Ok(())
            }
            AppCommand::NextSubstitute => {
                self.next_substitute();
                Ok(())
            }
            AppCommand::FlipSubstitute => {
                self.flip_substitute();
                Ok(())
            }
            AppCommand::Help => {
                print_help();
                Ok(())
            }
            // Quit breaks the loop before dispatch.
            AppCommand::Quit => Ok(()),
        }
    }

    #[instrument(skip(self))]
    fn browse(&self, filters: &[String], sort: Option<String>, limit: Option<usize>) {
        let sort_keyword = sort.unwrap_or_else(|| self.config.browse.default_sort.clone());
        let limit = limit.unwrap_or(self.config.browse.default_limit);

        let results = filter_and_sort(
            self.catalog.recipes(),
            self.catalog.categories(),
            filters,
            SortOption::parse(&sort_keyword),
            limit,
        );

        if results.is_empty() {
            println!("No recipes match.");
            return;
        }

        for recipe in &results {
            let categories = self
                .catalog
                .categories()
                .resolve_names(&recipe.category_ids)
                .join(", ");
            println!(
                "#{:<3} {:<34} {:>3} min  {:<8} {:<9} [{}]",
                recipe.id,
                recipe.title,
                recipe.total_time(),
                recipe.difficulty,
                rating_display(recipe),
                categories
            );
        }
    }

    fn list_categories(&self) {
        for category in self.catalog.categories().iter_sorted() {
            println!(
                "#{:<3} {:<16} ({} recipes)",
                category.id, category.name, category.recipe_count
            );
        }
    }

    #[instrument(skip(self))]
    fn show(&mut self, recipe_id: u32) {
        let Some(recipe) = self.catalog.recipe(recipe_id) else {
            println!("No recipe #{recipe_id}.");
            return;
        };

        let categories = self
            .catalog
            .categories()
            .resolve_names(&recipe.category_ids)
            .join(", ");

        println!("{} — {}", recipe.title, recipe.description);
        println!(
            "  {} | prep {} min, cook {} min | serves {} | {} kcal | {}",
            recipe.difficulty,
            recipe.prep_time,
            recipe.cook_time,
            recipe.servings,
            recipe.calories,
            rating_display(recipe)
        );
        println!(
            "  Categories: [{}] | added {}",
            categories,
            recipe.created_at.format("%Y-%m-%d")
        );

        if let Some(nutrition) = self.catalog.nutrition(recipe_id) {
            let slices = chart_data(nutrition);
            if slices.is_empty() {
                println!("  No nutritional data available");
            } else {
                if let Some(calories) = nutrition.calories {
                    println!("  Nutrition ({calories} kcal):");
                }
                for slice in &slices {
                    println!("    {:<10} {:>5.1} g", slice.name, slice.grams);
                }
                if let Some(note) = &nutrition.additional_info {
                    println!("    {note}");
                }
            }
        }

        let steps = self.catalog.steps(recipe_id);
        if !steps.is_empty() {
            println!("  {} cooking steps — 'cook {}' to start.", steps.len(), recipe_id);
        }

        let initial = recipe.rating.map(|r| r.round() as u8);
        self.rating = Some((recipe_id, StarRating::new(initial)));
    }

    #[instrument(skip(self))]
    async fn cook(&mut self, recipe_id: u32) -> AppResult<()> {
        let Some(recipe) = self.catalog.recipe(recipe_id) else {
            println!("No recipe #{recipe_id}.");
            return Ok(());
        };
        let title = recipe.title.clone();
        let initial = recipe.rating.map(|r| r.round() as u8);

        let steps = self.catalog.steps(recipe_id).to_vec();
        if steps.is_empty() {
            println!("No cooking steps recorded for {title}.");
            return Ok(());
        }

        // Replacing a session cancels its countdown subscription first.
        if let Some(old) = self.session.take() {
            if let Some(timer) = old.timer {
                timer.reset().await;
            }
        }

        let progress = CookingProgress::new(steps.len())?;
        self.session = Some(CookSession {
            recipe_id,
            steps,
            progress,
            timer: None,
            timer_step: None,
        });
        self.rating = Some((recipe_id, StarRating::new(initial)));

        info!(recipe_id, "Cooking session started");
        println!("Cooking: {title}");
        self.print_steps();

        Ok(())
    }

    fn print_steps(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        for (index, step) in session.steps.iter().enumerate() {
            let marker = if session.progress.is_step_complete(index) {
                "[x]"
            } else if session.progress.current_step() == index {
                "[>]"
            } else {
                "[ ]"
            };
            let timer_note = step
                .duration_minutes
                .map(|minutes| format!(" ({minutes} min timer)"))
                .unwrap_or_default();
            println!(
                "  {marker} {}. {}{}",
                index + 1,
                step.label(index),
                timer_note
            );
        }
        println!(
            "  {}/{} steps complete ({:.0}%)",
            session.progress.completed_count(),
            session.progress.total(),
            session.progress.percent_complete()
        );
    }

    fn select_step(&mut self, step: usize) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            println!("Start cooking first: cook <recipe-id>.");
            return Ok(());
        };

        session.progress.select_step(step)?;

        if let Some(step_def) = session.steps.get(step) {
            println!("Step {}: {}", step + 1, step_def.label(step));
            println!("  {}", step_def.instructions);
            if let Some(minutes) = step_def.duration_minutes {
                println!("  Timed step: {minutes} min — 'timer start' when ready.");
            }
        }

        Ok(())
    }

    fn toggle_step(&mut self, step: usize) -> AppResult<()> {
        if self.session.is_none() {
            println!("Start cooking first: cook <recipe-id>.");
            return Ok(());
        }
        self.apply_toggle(step)
    }

    /// A countdown finished; mark its step complete the way the embedded
    /// timer does in the browsing UI.
    fn timer_finished(&mut self, step: usize) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        // Already toggled by hand while the countdown ran; leave it.
        if session.progress.is_step_complete(step) {
            debug!(step, "Timed step already complete");
            return Ok(());
        }

        println!("(timer) Step {} finished.", step + 1);
        self.apply_toggle(step)
    }

    fn apply_toggle(&mut self, step: usize) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let recipe_id = session.recipe_id;
        let update = session.progress.toggle_step(step)?;

        match update {
            ProgressUpdate::StepCompleted { done, total, .. } => {
                println!("Step {} done ({done}/{total}).", step + 1);
            }
            ProgressUpdate::StepReopened { done, total, .. } => {
                println!("Step {} reopened ({done}/{total}).", step + 1);
            }
            ProgressUpdate::AllComplete => {
                info!(recipe_id, "Recipe completed");
                println!("All steps complete — enjoy your meal!");

                let toast = Toast::new(
                    "Congratulations!",
                    "You've completed all steps of this recipe!",
                );
                if let Err(e) = self.sink.toast(&toast) {
                    warn!(error = ?e, "Congratulation toast failed");
                }
                if let Err(e) = self.sink.achievement_unlocked(&CHEF_MASTER) {
                    warn!(error = ?e, "Achievement report failed");
                }
            }
        }

        Ok(())
    }

    async fn timer_action(&mut self, action: TimerAction) -> AppResult<()> {
        match action {
            TimerAction::Start => self.timer_start().await,
            TimerAction::Pause => {
                match self.active_timer() {
                    Some(runner) => {
                        if runner.pause().await {
                            let (_, _, display) = runner.snapshot().await;
                            println!("Timer paused at {display}.");
                        } else {
                            println!("No running timer to pause.");
                        }
                    }
                    None => println!("No timer armed."),
                }
                Ok(())
            }
            TimerAction::Reset => {
                match self.active_timer() {
                    Some(runner) => {
                        runner.reset().await;
                        let (_, _, display) = runner.snapshot().await;
                        println!("Timer reset to {display}.");
                    }
                    None => println!("No timer armed."),
                }
                Ok(())
            }
        }
    }

    async fn timer_start(&mut self) -> AppResult<()> {
        let event_tx = self.event_tx.clone();
        let sink = Arc::clone(&self.sink);

        let Some(session) = self.session.as_mut() else {
            println!("Start cooking first: cook <recipe-id>.");
            return Ok(());
        };

        let step = session.progress.current_step();
        let Some(step_def) = session.steps.get(step) else {
            return Ok(());
        };
        let Some(seconds) = step_def.timer_seconds() else {
            println!("Step {} has no timer.", step + 1);
            return Ok(());
        };

        // Same step: resume the existing countdown instead of re-arming.
        if session.timer_step == Some(step) {
            if let Some(runner) = &session.timer {
                if runner.start().await {
                    let (_, _, display) = runner.snapshot().await;
                    println!("Timer running — {display} left.");
                } else {
                    println!("Timer already running or finished ('timer reset' to re-arm).");
                }
                return Ok(());
            }
        }

        // Arm a fresh countdown for this step, cancelling any previous
        // one before it is replaced.
        if let Some(previous) = session.timer.take() {
            previous.reset().await;
        }

        let label = step_def.label(step);
        let timer = StepTimer::new(label.clone(), seconds)?;

        // Completion arrives on the tick task; forward it to this loop so
        // the step toggle runs serialized with console commands.
        let on_complete: CompletionCallback = Arc::new(move || {
            if event_tx
                .try_send(AppCommand::TimerFinished { step })
                .is_err()
            {
                warn!(step, "Timer completion event dropped");
            }
        });

        let runner = TimerRunner::new(timer, sink as Arc<dyn EventSink>, on_complete);
        runner.start().await;
        let (_, _, display) = runner.snapshot().await;

        session.timer = Some(runner);
        session.timer_step = Some(step);

        println!("Timer started for step {} — {display} on the clock.", step + 1);

        Ok(())
    }

    fn active_timer(&self) -> Option<&TimerRunner> {
        self.session.as_ref().and_then(|s| s.timer.as_ref())
    }

    fn rate(&mut self, stars: u8) -> AppResult<()> {
        let sink = Arc::clone(&self.sink);

        let Some((recipe_id, rating)) = self.rating.as_mut() else {
            println!("Show or cook a recipe before rating it.");
            return Ok(());
        };

        let Some(outcome) = rating.rate(stars)? else {
            return Ok(());
        };

        let feedback = rating.feedback().unwrap_or_default();
        println!("Rated recipe #{recipe_id}: {stars}★ — {feedback}");

        if outcome.celebration {
            // The browsing UI throws confetti here; the console settles
            // for a flourish.
            println!("🎉");
        }

        if outcome.five_star {
            if let Err(e) = sink.achievement_unlocked(&CULINARY_CRITIC) {
                warn!(error = ?e, "Achievement report failed");
            }
        }

        Ok(())
    }

    fn substitute(&mut self, ingredient: &str) {
        match self.catalog.substitutes_for(ingredient) {
            Some(entry) => {
                self.card =
                    SubstitutionCard::new(entry.ingredient.clone(), entry.substitutes.clone());
                if let Some(card) = &self.card {
                    print_card(card);
                }
            }
            None => println!("No substitutions known for {ingredient}."),
        }
    }

    fn next_substitute(&mut self) {
        match self.card.as_mut() {
            Some(card) => {
                card.cycle_next();
                print_card(card);
            }
            None => println!("Look up an ingredient first: sub <ingredient>."),
        }
    }

    fn flip_substitute(&mut self) {
        match self.card.as_mut() {
            Some(card) => {
                card.flip();
                print_card(card);
            }
            None => println!("Look up an ingredient first: sub <ingredient>."),
        }
    }
}

fn rating_display(recipe: &Recipe) -> String {
    match recipe.rating {
        Some(rating) => format!("{rating:.1}★ ({})", recipe.rating_count),
        None => "unrated".to_string(),
    }
}

fn print_card(card: &SubstitutionCard) {
    let current = card.current();
    if card.is_flipped() {
        println!("Substitution details: {}", current.description);
        println!("  'flip' to go back.");
    } else {
        println!(
            "Substitute for {}: {} ({})",
            card.ingredient(),
            current.name,
            current.ratio
        );
        if card.option_count() > 1 {
            println!("  'next' for another option, 'flip' for details.");
        } else {
            println!("  'flip' for details.");
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  browse [sort=<popular|time|difficulty>] [limit=<n>] [<category>[,<category>...]]");
    println!("  categories              list the category table");
    println!("  show <recipe-id>        recipe detail with nutrition breakdown");
    println!("  cook <recipe-id>        start a step-by-step cooking session");
    println!("  step <n>                select the step being worked on");
    println!("  toggle <n>              mark a step done (or reopen it)");
    println!("  timer start|pause|reset countdown for the selected timed step");
    println!("  rate <1-5>              rate the recipe last shown or cooked");
    println!("  sub <ingredient>        ingredient substitution lookup");
    println!("  next / flip             rotate or flip the substitution card");
    println!("  quit");
}

/// Creates a single chat [`Message`](crate::Message) from a role shorthand.
///
/// ```rust
/// use promptchain::{Role, pc_msg};
///
/// let message = pc_msg!(system => "Be very succinct");
/// assert_eq!(message.role, Role::System);
/// assert_eq!(message.content, "Be very succinct");
/// ```
#[macro_export]
macro_rules! pc_msg {
    (system => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::System, $content)
    };
    (user => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::User, $content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::Assistant, $content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use system, user, or assistant");
    };
}

/// Creates a `Vec<Message>` from role/content pairs.
///
/// ```rust
/// use promptchain::{Role, Thread, pc_messages};
///
/// let thread = Thread::with_messages(pc_messages![
///     system => "Be very succinct",
///     user => "My name is Jon Snow",
///     assistant => "Hello Jon.",
/// ]);
///
/// assert_eq!(thread.len().expect("readable"), 3);
/// ```
#[macro_export]
macro_rules! pc_messages {
    () => {
        Vec::<$crate::Message>::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        vec![$($crate::pc_msg!($role => $content)),+]
    };
}

/// Binds user text to chainable prompts and runs them in order from the default seed.
///
/// `pc_chain![link1 => "A", link2 => "B"]` expands to
/// `chain([link1.link("A"), link2.link("B")])` and must be awaited.
///
/// ```rust,no_run
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// use promptchain::{CompletionOptions, Thread, get_prompt_link, pc_chain};
///
/// let namer = get_prompt_link(CompletionOptions::default(), Thread::new())?;
/// let response = pc_chain![
///     namer => "My name is Jon Snow",
///     namer => "What is my name?",
/// ]
/// .await?;
/// println!("{}", response.message.content);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! pc_chain {
    ($($link:expr => $text:expr),+ $(,)?) => {
        $crate::chain([$(($link).link($text)),+])
    };
}

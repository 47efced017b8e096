use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    distpack completions bash > ~/.bash_completion.d/distpack\n\n\
                  Generate zsh completions:\n    distpack completions zsh > ~/.zfunc/_distpack\n\n\
                  Generate fish completions:\n    distpack completions fish > ~/.config/fish/completions/distpack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

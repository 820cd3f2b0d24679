mod assemble;
mod body;
mod grammar;
mod header;
mod line_source;
mod notes;
mod run;
#[cfg(test)]
mod tests;
mod text;

pub use run::run;

pub(crate) use grammar::CorpusGrammar;

// Interview backdrop generation. Stateless: one job title in, one image out.

pub mod handlers;
pub mod prompts;

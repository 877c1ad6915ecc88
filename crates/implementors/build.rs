use impldex_implementors_spec::compile::BuildCtx;

fn main() {
	let ctx = BuildCtx::new();

	impldex_implementors_spec::implementors::compile::build(&ctx);
}

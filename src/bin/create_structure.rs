use skel::api::{create_structure, CreateOptions, STRUCTURE_ITEMS, STRUCTURE_SUMMARY};

fn main() -> miette::Result<()> {
    skel::init_logging(false);

    create_structure(&STRUCTURE_ITEMS, &CreateOptions::default(), |entry| {
        println!("{}", entry.confirmation())
    })?;

    println!("{}", STRUCTURE_SUMMARY);

    Ok(())
}

use skel::api::{create_files, CreateOptions, FILES_SUMMARY, FILE_ITEMS};

fn main() -> miette::Result<()> {
    skel::init_logging(false);

    create_files(&FILE_ITEMS, &CreateOptions::default(), |entry| {
        println!("{}", entry.confirmation())
    })?;

    println!("{}", FILES_SUMMARY);

    Ok(())
}

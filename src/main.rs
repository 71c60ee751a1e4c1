use jumplist::fixture;

fn main() {
    let mut list = match fixture::preset(10) {
        Ok(list) => list,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    println!("{}\n", list.render_pretty());

    for value in ["bat", "cab", "dog", "egg"] {
        list.insert(value);
    }
    println!("after inserts:\n{}\n", list.render_pretty());

    for value in ["a", "d", "zzz"] {
        list.erase(value);
    }
    println!("after erases:\n{}\n", list.render_pretty());

    println!("size: {}", list.size());
    println!("get(3): {:?}", list.get(3));
    println!("find(\"cat\"): {}", list.find("cat"));
}

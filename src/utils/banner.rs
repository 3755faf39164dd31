const LOGO: &str = r"
        .-----------------.
       /   ___   _  ___   /|
      /   | _ ) (_)/ _ \ / |
     /    | _ \ | | (_) /  |
    /     |___/ |_|\___/   /
   /                     /
  '---------------------'
";

pub fn print_banner() {
    println!("{LOGO}");
    println!("biostrap client CLI");
}

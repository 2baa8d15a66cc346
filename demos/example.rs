// Run with: cargo run --release --example example

use cerf::*;

fn main() {

let z = Complex::<f64>::new(1.21, -0.93);
let relerror = 1.0e-3;

println!("z = {}", z);
println!("erf(z)    = {}",    cerf_with_relerror(z, relerror));
println!("erfc(z)   = {}",   cerfc_with_relerror(z, relerror));
println!("erfcx(z)  = {}",  cerfcx_with_relerror(z, relerror));
println!("erfi(z)   = {}",   cerfi_with_relerror(z, relerror));
println!("w(z)      = {}",  w_of_z_with_relerror(z, relerror));
println!("dawson(z) = {}", cdawson_with_relerror(z, relerror));

let x: f64 = 0.75;
println!();
println!("x = {}", x);
println!("erf(x)    = {}", x.erf());
println!("erfc(x)   = {}", x.erfc());
println!("erfcx(x)  = {}", x.erfcx());
println!("erfi(x)   = {}", x.erfi());
println!("Im w(x)   = {}", x.w_im());
println!("dawson(x) = {}", x.dawson());

println!();
for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
    println!("voigt({:4.1}, sigma = 0.5, gamma = 0.3) = {}", x, voigt(x, 0.5, 0.3));
}
}

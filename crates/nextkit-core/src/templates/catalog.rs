//! Built-in template sources.
//!
//! Page templates carry the [`TITLE_PLACEHOLDER`] literal, which is replaced
//! with the capitalized page name when a page is planned.

/// Literal replaced with the page title in page templates
pub const TITLE_PLACEHOLDER: &str = "Page Title";

/// Component name that pulls in the react-slick / slick-carousel packages
pub const CAROUSEL_COMPONENT: &str = "Carousel";

/// Components created when the user asks for "all essential components"
pub const ESSENTIAL_COMPONENTS: &[&str] = &["Button", "Footer", "Header", CAROUSEL_COMPONENT];

/// Packages the carousel component imports
pub const CAROUSEL_PACKAGES: &[&str] = &["react-slick", "slick-carousel"];

pub mod typed {
    pub const PAGE: &str = r#"import type { NextPage } from 'next';

const Page: NextPage = () => {
  return (
    <>
      <section className="">
        <h1>Page Title</h1>
      </section>
    </>
  );
};

export default Page;
"#;

    pub const API_ROUTE: &str = r#"import { NextApiResponse } from 'next';

export async function GET(res: NextApiResponse) {
  res.status(200).json({ message: 'API route works!' });
}
"#;

    pub const BUTTON: &str = r#"import React from 'react';

interface ButtonProps {
  label: string;
  onClick?: () => void;
}

const Button: React.FC<ButtonProps> = ({ label, onClick }) => {
  return <button onClick={onClick}>{label}</button>;
};

export default Button;
"#;

    pub const FOOTER: &str = r#"import React from 'react';

const Footer: React.FC = () => {
  return (
    <footer>
      <p>&copy; {new Date().getFullYear()} My Company</p>
    </footer>
  );
};

export default Footer;
"#;

    pub const HEADER: &str = r#"import React from 'react';

const Header: React.FC = () => {
  return (
    <header>
      <h1>My Application</h1>
    </header>
  );
};

export default Header;
"#;

    pub const CAROUSEL: &str = r#"import React from 'react';
import Slider from 'react-slick';
import 'slick-carousel/slick/slick.css';
import 'slick-carousel/slick/slick-theme.css';

const Carousel: React.FC = () => {
  const settings = {
    dots: true,
    infinite: true,
    speed: 500,
    slidesToShow: 1,
    slidesToScroll: 1,
  };

  return (
    <Slider {...settings}>
      <div>
        <h3>Slide 1</h3>
      </div>
      <div>
        <h3>Slide 2</h3>
      </div>
      <div>
        <h3>Slide 3</h3>
      </div>
    </Slider>
  );
};

export default Carousel;
"#;

    /// Component shell rendered when the catalog has no entry for a name
    pub const FALLBACK_COMPONENT: &str = r#"import React from 'react';

interface {{ name }}Props {
  // Define your props here
}

const {{ name }}: React.FC<{{ name }}Props> = () => {
  return (
    <div>
      {/* Add your component code here */}
      {{ name }} Component
    </div>
  );
};

export default {{ name }};
"#;
}

pub mod untyped {
    pub const PAGE: &str = r#"const Page = () => {
  return (
    <>
      <section className="">
        <h1>Page Title</h1>
      </section>
    </>
  );
};

export default Page;
"#;

    pub const API_ROUTE: &str = r#"export async function GET(req, res) {
  res.status(200).json({ message: 'API route works!' });
}
"#;

    pub const BUTTON: &str = r#"const Button = ({ label, onClick }) => {
  return <button onClick={onClick}>{label}</button>;
};

export default Button;
"#;

    pub const FOOTER: &str = r#"const Footer = () => {
  return (
    <footer>
      <p>&copy; {new Date().getFullYear()} My Company</p>
    </footer>
  );
};

export default Footer;
"#;

    pub const HEADER: &str = r#"const Header = () => {
  return (
    <header>
      <h1>My Application</h1>
    </header>
  );
};

export default Header;
"#;

    pub const CAROUSEL: &str = r#"import React from 'react';
import Slider from 'react-slick';
import 'slick-carousel/slick/slick.css';
import 'slick-carousel/slick/slick-theme.css';

const Carousel = () => {
  const settings = {
    dots: true,
    infinite: true,
    speed: 500,
    slidesToShow: 1,
    slidesToScroll: 1,
  };

  return (
    <Slider {...settings}>
      <div>
        <h3>Slide 1</h3>
      </div>
      <div>
        <h3>Slide 2</h3>
      </div>
      <div>
        <h3>Slide 3</h3>
      </div>
    </Slider>
  );
};

export default Carousel;
"#;

    pub const FALLBACK_COMPONENT: &str = r#"const {{ name }} = () => {
  return (
    <div>
      {/* Add your component code here */}
      {{ name }} Component
    </div>
  );
};

export default {{ name }};
"#;
}
